//! Fixed-column coordinate record parsing and writing.
//!
//! Character columns are authoritative, independent of whitespace
//! tokenization, mirroring the standard macromolecular coordinate file
//! layout: record type 1-6, atom name 13-16, residue name 18-20, chain
//! id 22, residue sequence number 23-26, x/y/z 31-38/39-46/47-54.
//! Malformed numeric fields decode to zero and lines shorter than the
//! minimum width are skipped; a single bad line never aborts a parse.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use glam::Vec3;

use crate::options::ParserOptions;
use crate::structure::{Atom, Chain, Residue, Structure};

/// Record type token for polymer atom records.
const RECORD_ATOM: &str = "ATOM  ";
/// Record type token for hetero-atom records (ligands, waters).
const RECORD_HETATM: &str = "HETATM";

/// Minimum line width covering every required field (through the z column).
const MIN_LINE_LEN: usize = 54;

/// Solvent residue names dropped when non-polymer filtering is on.
const SOLVENT_NAMES: &[&str] = &["HOH", "WAT", "DOD", "SOL"];

/// Placeholder residue names dropped when non-polymer filtering is on.
const UNKNOWN_NAMES: &[&str] = &["UNK", "UNX"];

/// Nucleic-acid residue names dropped when nucleic filtering is on.
const NUCLEIC_NAMES: &[&str] = &[
    "A", "C", "G", "U", "I", "DA", "DC", "DG", "DT", "DU", "DI",
];

/// Structural errors in coordinate input.
///
/// Field-level problems (non-numeric coordinates, short lines) are
/// recovered in place and never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdbError {
    /// Two separate atom runs in one chain share a residue index.
    DuplicateResidue {
        /// Chain the collision occurred in.
        chain_id: char,
        /// The residue sequence number appearing twice.
        residue_index: i32,
    },
}

impl fmt::Display for PdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateResidue { chain_id, residue_index } => write!(
                f,
                "duplicate residue index {residue_index} in chain {chain_id}"
            ),
        }
    }
}

impl std::error::Error for PdbError {}

/// Slice a 0-based byte column range out of a line, trimmed.
///
/// Out-of-range or non-UTF8-boundary ranges yield an empty field.
fn field(line: &str, range: std::ops::Range<usize>) -> &str {
    line.get(range).map_or("", str::trim)
}

/// Decode a numeric column, defaulting to zero on malformed input.
fn numeric_field<T: FromStr + Default>(line: &str, range: std::ops::Range<usize>) -> T {
    field(line, range).parse().unwrap_or_default()
}

fn is_filtered(residue_name: &str, options: &ParserOptions) -> bool {
    if options.exclude_solvent
        && (SOLVENT_NAMES.contains(&residue_name)
            || UNKNOWN_NAMES.contains(&residue_name))
    {
        return true;
    }
    options.exclude_nucleic && NUCLEIC_NAMES.contains(&residue_name)
}

fn parse_atom_line(line: &str) -> Atom {
    let x: f32 = numeric_field(line, 30..38);
    let y: f32 = numeric_field(line, 38..46);
    let z: f32 = numeric_field(line, 46..54);
    Atom {
        name: field(line, 12..16).to_owned(),
        residue_name: field(line, 17..20).to_owned(),
        chain_id: field(line, 21..22).chars().next().unwrap_or(' '),
        residue_index: numeric_field(line, 22..26),
        position: Vec3::new(x, y, z),
    }
}

/// Parse coordinate text into a [`Structure`].
///
/// Unrecognized record types and lines shorter than the minimum width
/// are ignored. Residues are grouped from consecutive atoms sharing
/// (chain, residue index) and emitted sorted ascending by residue index
/// regardless of input order.
///
/// # Errors
///
/// Returns [`PdbError::DuplicateResidue`] when a residue index appears
/// in two non-adjacent atom runs of the same chain.
pub fn parse(text: &str, options: &ParserOptions) -> Result<Structure, PdbError> {
    // Per-chain atom buckets, chains kept in first-seen order.
    let mut chain_order: Vec<char> = Vec::new();
    let mut chain_atoms: Vec<Vec<Atom>> = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        if line.len() < MIN_LINE_LEN {
            if !line.trim().is_empty() {
                skipped += 1;
                log::trace!("skipping short record line: {line:?}");
            }
            continue;
        }
        let record = line.get(0..6).unwrap_or("");
        let recognized = record == RECORD_ATOM
            || (options.include_hetero && record == RECORD_HETATM);
        if !recognized {
            continue;
        }

        let atom = parse_atom_line(line);
        if is_filtered(&atom.residue_name, options) {
            continue;
        }

        let slot = chain_order
            .iter()
            .position(|&id| id == atom.chain_id)
            .unwrap_or_else(|| {
                chain_order.push(atom.chain_id);
                chain_atoms.push(Vec::new());
                chain_atoms.len() - 1
            });
        chain_atoms[slot].push(atom);
    }

    let mut chains = Vec::with_capacity(chain_order.len());
    for (id, atoms) in chain_order.into_iter().zip(chain_atoms) {
        chains.push(build_chain(id, atoms)?);
    }

    let structure = Structure::from_chains(chains);
    log::debug!(
        "parsed {} atoms in {} residues across {} chains ({} lines skipped)",
        structure.atom_count(),
        structure.residue_count(),
        structure.chains().len(),
        skipped,
    );
    Ok(structure)
}

/// Group a chain's atom stream into residues, sorted by index.
fn build_chain(id: char, atoms: Vec<Atom>) -> Result<Chain, PdbError> {
    let mut residues: Vec<Residue> = Vec::new();
    for atom in atoms {
        match residues.last_mut() {
            Some(current) if current.index == atom.residue_index => {
                current.atoms.push(atom);
            }
            _ => residues.push(Residue {
                index: atom.residue_index,
                name: atom.residue_name.clone(),
                atoms: vec![atom],
            }),
        }
    }

    residues.sort_by_key(|r| r.index);
    for pair in residues.windows(2) {
        if pair[0].index == pair[1].index {
            return Err(PdbError::DuplicateResidue {
                chain_id: id,
                residue_index: pair[0].index,
            });
        }
    }

    Ok(Chain { id, residues })
}

/// Serialize a structure back into fixed-column atom records.
///
/// Parsed fields land in the same columns [`parse`] reads, so numeric
/// values round-trip within formatting tolerance. Only the fields the
/// data model carries are written; occupancy and temperature columns
/// are left blank.
#[must_use]
pub fn write(structure: &Structure) -> String {
    let mut out = String::new();
    let mut serial = 0usize;
    for chain in structure.chains() {
        for residue in &chain.residues {
            for atom in &residue.atoms {
                serial += 1;
                // Column map: serial 7-11, name 13-16, residue name
                // 18-20, chain 22, residue index 23-26, x/y/z 31-54.
                let _ = writeln!(
                    out,
                    "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}",
                    serial,
                    atom.name,
                    residue.name,
                    chain.id,
                    residue.index,
                    atom.position.x,
                    atom.position.y,
                    atom.position.z,
                );
            }
        }
    }
    out.push_str("END\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a column-exact atom record line.
    fn atom_line(
        name: &str,
        resn: &str,
        chain: char,
        index: i32,
        x: f32,
        y: f32,
        z: f32,
    ) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}",
            1, name, resn, chain, index, x, y, z
        )
    }

    #[test]
    fn test_parse_single_atom_fields() {
        let text = atom_line("CA", "ALA", 'A', 7, 1.5, -2.25, 30.125);
        let structure = parse(&text, &ParserOptions::default()).unwrap();
        let chain = structure.chain('A').unwrap();
        assert_eq!(chain.residues.len(), 1);
        let residue = &chain.residues[0];
        assert_eq!(residue.index, 7);
        assert_eq!(residue.name, "ALA");
        let atom = &residue.atoms[0];
        assert_eq!(atom.name, "CA");
        assert!((atom.position.x - 1.5).abs() < 1e-4);
        assert!((atom.position.y + 2.25).abs() < 1e-4);
        assert!((atom.position.z - 30.125).abs() < 1e-4);
    }

    #[test]
    fn test_malformed_coordinate_decodes_to_zero() {
        let mut line = atom_line("CA", "ALA", 'A', 1, 1.0, 2.0, 3.0);
        // Stomp the y column (39-46) with non-numeric text.
        line.replace_range(38..46, "  oops  ");
        let structure = parse(&line, &ParserOptions::default()).unwrap();
        let atom = &structure.chain('A').unwrap().residues[0].atoms[0];
        assert!((atom.position.x - 1.0).abs() < 1e-4);
        assert_eq!(atom.position.y, 0.0);
        assert!((atom.position.z - 3.0).abs() < 1e-4);
        assert_eq!(atom.name, "CA");
    }

    #[test]
    fn test_short_and_foreign_lines_skipped() {
        let text = format!(
            "REMARK not an atom\nATOM short\n{}\nTER\n",
            atom_line("CA", "GLY", 'A', 1, 0.0, 0.0, 0.0)
        );
        let structure = parse(&text, &ParserOptions::default()).unwrap();
        assert_eq!(structure.atom_count(), 1);
    }

    #[test]
    fn test_residues_sorted_by_index() {
        let text = [
            atom_line("CA", "ALA", 'A', 3, 3.0, 0.0, 0.0),
            atom_line("CA", "GLY", 'A', 1, 1.0, 0.0, 0.0),
            atom_line("CA", "SER", 'A', 2, 2.0, 0.0, 0.0),
        ]
        .join("\n");
        let structure = parse(&text, &ParserOptions::default()).unwrap();
        let indices: Vec<i32> = structure.chain('A').unwrap()
            .residues
            .iter()
            .map(|r| r.index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_residue_index_is_error() {
        let text = [
            atom_line("CA", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            atom_line("CA", "GLY", 'A', 2, 1.0, 0.0, 0.0),
            atom_line("CA", "SER", 'A', 1, 2.0, 0.0, 0.0),
        ]
        .join("\n");
        let err = parse(&text, &ParserOptions::default()).unwrap_err();
        assert_eq!(
            err,
            PdbError::DuplicateResidue { chain_id: 'A', residue_index: 1 }
        );
    }

    #[test]
    fn test_hetero_records_follow_option() {
        let het = atom_line("C1", "LIG", 'A', 1, 0.0, 0.0, 0.0)
            .replacen("ATOM  ", "HETATM", 1);
        let excluded = parse(&het, &ParserOptions::default()).unwrap();
        assert!(excluded.is_empty());

        let options = ParserOptions {
            include_hetero: true,
            ..ParserOptions::default()
        };
        let included = parse(&het, &options).unwrap();
        assert_eq!(included.atom_count(), 1);
    }

    #[test]
    fn test_solvent_and_nucleic_filtering() {
        let text = [
            atom_line("CA", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            atom_line("O", "HOH", 'A', 2, 1.0, 0.0, 0.0),
            atom_line("CA", "UNK", 'A', 3, 2.0, 0.0, 0.0),
            atom_line("P", "DG", 'B', 1, 3.0, 0.0, 0.0),
        ]
        .join("\n");
        let structure = parse(&text, &ParserOptions::default()).unwrap();
        assert_eq!(structure.atom_count(), 1);
        assert!(structure.chain('B').is_none());

        let keep_all = ParserOptions {
            include_hetero: false,
            exclude_solvent: false,
            exclude_nucleic: false,
        };
        let unfiltered = parse(&text, &keep_all).unwrap();
        assert_eq!(unfiltered.atom_count(), 4);
    }

    #[test]
    fn test_write_round_trips_parsed_fields() {
        let text = [
            atom_line("N", "ALA", 'A', 1, 11.104, -0.207, 8.5),
            atom_line("CA", "ALA", 'A', 1, 12.04, 0.81, 8.062),
            atom_line("CA", "GLY", 'B', 5, -3.333, 100.25, 0.001),
        ]
        .join("\n");
        let options = ParserOptions::default();
        let first = parse(&text, &options).unwrap();
        let rewritten = write(&first);
        let second = parse(&rewritten, &options).unwrap();

        assert_eq!(first.atom_count(), second.atom_count());
        for (a, b) in first
            .chains()
            .iter()
            .zip(second.chains())
            .flat_map(|(ca, cb)| ca.residues.iter().zip(&cb.residues))
            .flat_map(|(ra, rb)| ra.atoms.iter().zip(&rb.atoms))
        {
            assert_eq!(a.name, b.name);
            assert_eq!(a.residue_index, b.residue_index);
            assert!((a.position - b.position).length() < 1e-3);
        }
    }
}
