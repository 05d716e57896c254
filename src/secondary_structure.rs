//! Secondary-structure classification and segmentation.
//!
//! Classification is a pluggable strategy over backbone guide points so
//! the default geometric heuristic can be swapped for a hydrogen-bond
//! based implementation without touching the curve builder or the mesh
//! extruder.

use glam::Vec3;

use crate::options::ClassifierOptions;
use crate::structure::Chain;

/// Minimum classified residues a chain needs to yield any segment.
pub const MIN_CURVE_SUPPORT: usize = 4;

/// Q3 secondary structure classification for a single residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SsType {
    /// Alpha helix, rendered as a flat double-sided ribbon.
    Helix,
    /// Beta strand, rendered as an arrowhead ribbon.
    Sheet,
    /// Everything else, rendered as a tube.
    Coil,
}

/// A residue admitted to curve fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedResidue {
    /// Residue sequence number within its chain.
    pub residue_index: i32,
    /// Backbone guide point (alpha-carbon position).
    pub guide_point: Vec3,
    /// Assigned structural type.
    pub ss_type: SsType,
}

/// A maximal contiguous run of same-type residues within one chain.
///
/// Segments never span a chain boundary.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Chain this segment belongs to.
    pub chain_id: char,
    /// Structural type shared by every residue in the run.
    pub ss_type: SsType,
    /// The run's residues, in residue order.
    pub residues: Vec<ClassifiedResidue>,
}

impl Segment {
    /// Guide points of the run, in residue order.
    #[must_use]
    pub fn guide_points(&self) -> Vec<Vec3> {
        self.residues.iter().map(|r| r.guide_point).collect()
    }

    /// First and last residue index covered by the run.
    #[must_use]
    pub fn residue_range(&self) -> (i32, i32) {
        let first = self.residues.first().map_or(0, |r| r.residue_index);
        let last = self.residues.last().map_or(first, |r| r.residue_index);
        (first, last)
    }
}

/// Classification strategy over a chain's guide points.
///
/// Implementations must return exactly one type per guide point, in
/// order. The pipeline treats the strategy as a black box; thresholds
/// and any internal state are the implementation's own concern.
pub trait Classifier {
    /// Assign a structural type to each guide point.
    fn classify(&self, guide_points: &[Vec3]) -> Vec<SsType>;
}

/// Default geometric heuristic over the i to i+3 guide-point distance.
///
/// Short, consistent spacing lands in the helix band, near-extended
/// spacing in the sheet band, everything else is coil. An approximation
/// placeholder for a hydrogen-bond-pattern classifier; see
/// [`ClassifierOptions`] for the threshold configuration.
#[derive(Debug, Clone, Default)]
pub struct CaDistanceClassifier {
    options: ClassifierOptions,
}

impl CaDistanceClassifier {
    /// Build a classifier with the given distance bands.
    #[must_use]
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }
}

impl Classifier for CaDistanceClassifier {
    fn classify(&self, guide_points: &[Vec3]) -> Vec<SsType> {
        let n = guide_points.len();
        let o = &self.options;
        let mut raw = vec![SsType::Coil; n];
        for i in 0..n.saturating_sub(3) {
            let d = guide_points[i].distance(guide_points[i + 3]);
            if (o.helix_min..=o.helix_max).contains(&d) {
                raw[i] = SsType::Helix;
            } else if (o.sheet_min..=o.sheet_max).contains(&d) {
                raw[i] = SsType::Sheet;
            }
        }
        extend_runs(&raw)
    }
}

/// Extend each helix/sheet run over its trailing window partners.
///
/// The i to i+3 distance classifies residue i, so the last three
/// residues participating in a run's final window would otherwise stay
/// coil. Only coil slots are overwritten.
fn extend_runs(raw: &[SsType]) -> Vec<SsType> {
    let n = raw.len();
    let mut extended = raw.to_vec();
    let mut i = 0;
    while i < n {
        let t = raw[i];
        if t == SsType::Coil {
            i += 1;
            continue;
        }
        while i < n && raw[i] == t {
            i += 1;
        }
        for k in i..(i + 3).min(n) {
            if extended[k] == SsType::Coil {
                extended[k] = t;
            }
        }
    }
    extended
}

/// Convert isolated 1-residue helix/sheet runs to coil.
///
/// These are too short for ribbon rendering and would leave residues
/// with no backbone geometry.
#[must_use]
pub fn merge_short_segments(ss_types: &[SsType]) -> Vec<SsType> {
    let mut result = ss_types.to_vec();
    for i in 0..result.len() {
        if result[i] != SsType::Coil {
            let prev_same = i > 0 && result[i - 1] == result[i];
            let next_same =
                i + 1 < result.len() && result[i + 1] == result[i];
            if !prev_same && !next_same {
                result[i] = SsType::Coil;
            }
        }
    }
    result
}

/// Classify a chain and split it into maximal same-type segments.
///
/// Residues without a guide point are excluded from classification but
/// remain in the structure. Chains with fewer than
/// [`MIN_CURVE_SUPPORT`] classifiable residues yield no segments.
#[must_use]
pub fn segment_chain(chain: &Chain, classifier: &dyn Classifier) -> Vec<Segment> {
    let guided: Vec<(i32, Vec3)> = chain
        .residues
        .iter()
        .filter_map(|r| r.guide_point().map(|g| (r.index, g)))
        .collect();
    if guided.len() < MIN_CURVE_SUPPORT {
        return Vec::new();
    }

    let guide_points: Vec<Vec3> = guided.iter().map(|&(_, g)| g).collect();
    let mut types = classifier.classify(&guide_points);
    // A strategy returning the wrong length would desynchronize the
    // residue/type pairing below; pad or truncate to the guided count.
    types.resize(guided.len(), SsType::Coil);
    let types = merge_short_segments(&types);

    let mut segments: Vec<Segment> = Vec::new();
    for ((index, guide_point), ss_type) in guided.into_iter().zip(types) {
        let residue = ClassifiedResidue {
            residue_index: index,
            guide_point,
            ss_type,
        };
        match segments.last_mut() {
            Some(current) if current.ss_type == ss_type => {
                current.residues.push(residue);
            }
            _ => segments.push(Segment {
                chain_id: chain.id,
                ss_type,
                residues: vec![residue],
            }),
        }
    }
    segments
}
