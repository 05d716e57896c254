//! Crate-level error types.

use std::fmt;

use crate::pdb::PdbError;

/// Errors produced by the ribbonize crate.
#[derive(Debug)]
pub enum RibbonError {
    /// Structural error in the coordinate input.
    Parse(PdbError),
    /// No chain in the input yielded a classifiable residue run.
    EmptyStructure,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RibbonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::EmptyStructure => {
                write!(f, "input contains no usable chains")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RibbonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PdbError> for RibbonError {
    fn from(e: PdbError) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for RibbonError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
