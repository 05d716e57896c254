//! Centralized pipeline options with TOML preset support.
//!
//! All tweakable settings (parsing policy, classification thresholds,
//! ribbon/tube geometry) are consolidated here. Options serialize
//! to/from TOML for presets and export a JSON Schema for embedding
//! hosts. Every sub-struct uses `#[serde(default)]` so partial preset
//! files work correctly.
//!
//! Options are an explicit immutable value threaded into the pipeline,
//! never hidden global state, so concurrent runs with different visual
//! parameters cannot interfere.

mod classifier;
mod geometry;
mod parser;

use std::path::Path;

pub use classifier::ClassifierOptions;
pub use geometry::GeometryOptions;
pub use parser::ParserOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RibbonError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Coordinate record parsing policy.
    pub parser: ParserOptions,
    /// Geometric classification thresholds.
    pub classifier: ClassifierOptions,
    /// Curve sampling and mesh extrusion parameters.
    pub geometry: GeometryOptions,
}

impl Options {
    /// Generate JSON Schema describing the options surface.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Io`] when the file cannot be read and
    /// [`RibbonError::OptionsParse`] when its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, RibbonError> {
        let content = std::fs::read_to_string(path).map_err(RibbonError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::OptionsParse`] when serialization fails
    /// and [`RibbonError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), RibbonError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(RibbonError::Io)
    }

    /// Deserialize options from a JSON string, as delivered by an
    /// embedding host's settings panel. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::OptionsParse`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, RibbonError> {
        serde_json::from_str(json)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))
    }

    /// Serialize options to a JSON string for an embedding host.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::OptionsParse`] when serialization fails.
    pub fn to_json(&self) -> Result<String, RibbonError> {
        serde_json::to_string(self)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options: Options =
            toml::from_str("[geometry]\ntube_radius = 0.5\n").unwrap();
        assert_eq!(options.geometry.tube_radius, 0.5);
        assert_eq!(
            options.geometry.tube_radial_segments,
            GeometryOptions::default().tube_radial_segments
        );
        assert_eq!(options.parser, ParserOptions::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let options = Options::default();
        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: Options = toml::from_str(&text).unwrap();
        assert_eq!(options, parsed);
    }

    #[test]
    fn test_json_round_trip() {
        let options = Options::default();
        let json = options.to_json().unwrap();
        let parsed = Options::from_json(&json).unwrap();
        assert_eq!(options, parsed);
    }

    #[test]
    fn test_json_schema_has_sections() {
        let schema = serde_json::to_value(Options::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("parser").is_some());
        assert!(properties.get("classifier").is_some());
        assert!(properties.get("geometry").is_some());
    }
}
