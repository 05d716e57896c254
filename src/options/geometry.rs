use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Curve sampling and mesh extrusion parameters.
///
/// Widths, radii, and thresholds are in angstroms to match atomic
/// coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct GeometryOptions {
    /// Helix ribbon width.
    pub helix_width: f32,
    /// Helix ribbon thickness (front/back face separation).
    pub helix_thickness: f32,
    /// Sheet ribbon width before the arrowhead taper.
    pub sheet_width: f32,
    /// Sheet ribbon thickness.
    pub sheet_thickness: f32,
    /// Fraction of a sheet's samples covered by the arrowhead taper,
    /// measured from the C-terminal end.
    pub arrow_taper_fraction: f32,
    /// Width multiplier reached at the arrowhead's C-terminal sample.
    pub arrow_width_multiplier: f32,
    /// Coil tube radius.
    pub tube_radius: f32,
    /// Number of radial segments around coil tubes.
    pub tube_radial_segments: u32,
    /// Number of uniform parameter steps the spline is evaluated at
    /// before adaptive refinement.
    pub max_uniform_steps: u32,
    /// Chord length between adjacent samples that triggers a midpoint
    /// insertion.
    pub max_chord_length: f32,
    /// Deviation of the curve midpoint from the straight-line midpoint
    /// that triggers a midpoint insertion.
    pub curvature_tolerance: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            helix_width: 1.6,
            helix_thickness: 0.2,
            sheet_width: 1.4,
            sheet_thickness: 0.2,
            arrow_taper_fraction: 0.25,
            arrow_width_multiplier: 1.6,
            tube_radius: 0.3,
            tube_radial_segments: 8,
            max_uniform_steps: 32,
            max_chord_length: 1.5,
            curvature_tolerance: 0.15,
        }
    }
}
