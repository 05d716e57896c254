use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coordinate record parsing policy.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(default)]
pub struct ParserOptions {
    /// Accept hetero-atom records (ligands, waters) in addition to
    /// polymer atom records.
    pub include_hetero: bool,
    /// Drop known solvent and unknown/placeholder residue names so the
    /// backbone curve stays free of non-polymer noise.
    pub exclude_solvent: bool,
    /// Drop nucleic-acid residue names.
    pub exclude_nucleic: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            include_hetero: false,
            exclude_solvent: true,
            exclude_nucleic: true,
        }
    }
}
