//! End-to-end pipeline: coordinate text in, ribbon meshes out.
//!
//! A pure, synchronous, single-pass batch transformation. Each segment
//! is processed independently against the immutable structure and the
//! assembler collects the per-segment meshes in order, so callers may
//! fan segments out across threads without extra discipline; the
//! reference path here is single-threaded.

use crate::error::RibbonError;
use crate::geometry::extrude::extrude_segment;
use crate::geometry::frame::propagate_frames;
use crate::geometry::spline::sample_curve;
use crate::mesh::{RibbonGeometry, SegmentMesh};
use crate::options::Options;
use crate::pdb;
use crate::secondary_structure::{
    segment_chain, CaDistanceClassifier, Classifier,
};

/// Run the full pipeline with the default geometric classifier.
///
/// # Errors
///
/// Returns [`RibbonError::Parse`] on structural parse errors and
/// [`RibbonError::EmptyStructure`] when no chain yields a classifiable
/// residue run. Degenerate segments degrade to missing meshes, never
/// to errors.
pub fn build_geometry(
    text: &str,
    options: &Options,
) -> Result<RibbonGeometry, RibbonError> {
    let classifier = CaDistanceClassifier::new(options.classifier.clone());
    build_geometry_with(text, options, &classifier)
}

/// Run the full pipeline with a caller-provided classification
/// strategy.
///
/// # Errors
///
/// Same contract as [`build_geometry`].
pub fn build_geometry_with(
    text: &str,
    options: &Options,
    classifier: &dyn Classifier,
) -> Result<RibbonGeometry, RibbonError> {
    let structure = pdb::parse(text, &options.parser)?;

    let mut meshes = Vec::new();
    let mut segment_index = 0usize;
    let mut usable_chains = 0usize;

    for chain in structure.chains() {
        let segments = segment_chain(chain, classifier);
        if segments.is_empty() {
            log::debug!(
                "chain {} has {} guide residues, below curve support; no segments",
                chain.id,
                chain.guide_residue_count(),
            );
            continue;
        }
        usable_chains += 1;

        for segment in segments {
            let curve = sample_curve(&segment.guide_points(), &options.geometry);
            let frames = propagate_frames(&curve);
            if frames.len() < 2 {
                log::debug!(
                    "segment {segment_index} in chain {} is degenerate; skipping",
                    chain.id,
                );
                segment_index += 1;
                continue;
            }
            let mesh = extrude_segment(&frames, segment.ss_type, &options.geometry);
            meshes.push(SegmentMesh {
                chain_id: segment.chain_id,
                segment_index,
                ss_type: segment.ss_type,
                residue_range: segment.residue_range(),
                mesh,
            });
            segment_index += 1;
        }
    }

    if usable_chains == 0 {
        return Err(RibbonError::EmptyStructure);
    }

    log::info!(
        "built {} segment meshes from {} usable chains",
        meshes.len(),
        usable_chains,
    );
    Ok(RibbonGeometry { meshes })
}
