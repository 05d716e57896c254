//! Parsed molecular structure model: atoms, residues, chains.
//!
//! All types here are produced once by the parser and read-only
//! afterward. Downstream stages borrow the structure; nothing mutates it.

use glam::Vec3;
use rustc_hash::FxHashMap;

/// A single atom from a coordinate record.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom name, whitespace-trimmed (e.g. `CA`).
    pub name: String,
    /// Residue name (e.g. `ALA`).
    pub residue_name: String,
    /// Chain identifier.
    pub chain_id: char,
    /// Residue sequence number within the chain.
    pub residue_index: i32,
    /// Cartesian position in angstroms.
    pub position: Vec3,
}

/// A group of atoms sharing (chain, residue index).
#[derive(Debug, Clone)]
pub struct Residue {
    /// Residue sequence number, unique within its chain.
    pub index: i32,
    /// Residue name (e.g. `ALA`).
    pub name: String,
    /// Atoms belonging to this residue, in input order.
    pub atoms: Vec<Atom>,
}

/// Atom name of the backbone guide atom used for curve fitting.
const GUIDE_ATOM: &str = "CA";

impl Residue {
    /// Alpha-carbon position used as the backbone guide point.
    ///
    /// Residues without one are excluded from curve input but stay in
    /// the structure.
    #[must_use]
    pub fn guide_point(&self) -> Option<Vec3> {
        self.atoms
            .iter()
            .find(|a| a.name == GUIDE_ATOM)
            .map(|a| a.position)
    }
}

/// An ordered run of residues sharing a chain identifier.
///
/// Residues are sorted ascending by residue index and indices are
/// unique; both are enforced by the parser.
#[derive(Debug, Clone)]
pub struct Chain {
    /// Chain identifier from column 22 of the coordinate record.
    pub id: char,
    /// Residues sorted ascending by residue index.
    pub residues: Vec<Residue>,
}

impl Chain {
    /// Number of residues that can contribute a guide point.
    #[must_use]
    pub fn guide_residue_count(&self) -> usize {
        self.residues
            .iter()
            .filter(|r| r.guide_point().is_some())
            .count()
    }
}

/// Top-level parse result: chains in first-seen order with id lookup.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    chains: Vec<Chain>,
    by_id: FxHashMap<char, usize>,
}

impl Structure {
    /// Build a structure from chains, indexing them by id.
    pub(crate) fn from_chains(chains: Vec<Chain>) -> Self {
        let by_id = chains
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        Self { chains, by_id }
    }

    /// All chains, in the order their first atom appeared in the input.
    #[must_use]
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Look up a chain by identifier.
    #[must_use]
    pub fn chain(&self, id: char) -> Option<&Chain> {
        self.by_id.get(&id).map(|&i| &self.chains[i])
    }

    /// Whether the structure holds no chains at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Total residue count across all chains.
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(|c| c.residues.len()).sum()
    }

    /// Total atom count across all chains.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.chains
            .iter()
            .flat_map(|c| c.residues.iter())
            .map(|r| r.atoms.len())
            .sum()
    }
}
