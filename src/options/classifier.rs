use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Distance bands for the geometric secondary-structure heuristic.
///
/// The heuristic inspects the distance between guide points i and i+3
/// along the backbone. These thresholds are uncalibrated placeholders
/// with sensible defaults, not verified biochemistry; a hydrogen-bond
/// classifier plugged in via the strategy trait ignores them entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ClassifierOptions {
    /// Lower bound of the helix band for the i to i+3 distance (Å).
    pub helix_min: f32,
    /// Upper bound of the helix band (Å).
    pub helix_max: f32,
    /// Lower bound of the sheet band for the i to i+3 distance (Å).
    pub sheet_min: f32,
    /// Upper bound of the sheet band (Å).
    pub sheet_max: f32,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            helix_min: 4.5,
            helix_max: 6.0,
            sheet_min: 9.0,
            sheet_max: 11.0,
        }
    }
}
