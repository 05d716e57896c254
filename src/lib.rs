// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Ribbon-diagram mesh generation for macromolecular structures.
//!
//! Ribbonize turns fixed-column atomic coordinate text into renderable
//! triangle meshes that distinguish helices, sheets, and coils along a
//! polymer backbone: flat double-sided ribbons for helices, arrowhead
//! ribbons for sheets, and circular tubes for coils.
//!
//! # Key entry points
//!
//! - [`pipeline::build_geometry`] - the full text-to-meshes pipeline
//! - [`structure::Structure`] - the parsed atomic structure
//! - [`options::Options`] - runtime configuration (parsing, classification,
//!   geometry)
//! - [`secondary_structure::Classifier`] - pluggable classification strategy
//!
//! # Architecture
//!
//! Data flows strictly forward through five stages: coordinate text is
//! parsed into an immutable [`structure::Structure`]; each chain is
//! classified and split into same-type [`secondary_structure::Segment`]s;
//! every segment's guide points are fitted with an adaptively sampled
//! B-spline carrying parallel-transported orientation frames; the frames
//! are extruded into per-segment meshes; and the assembler collects them
//! into a [`mesh::RibbonGeometry`] in segment order. Vertex buffers are
//! plain [`bytemuck::Pod`] data, ready for GPU upload by a downstream
//! renderer.

pub mod error;
pub mod geometry;
pub mod mesh;
pub mod options;
pub mod pdb;
pub mod pipeline;
pub mod secondary_structure;
pub mod structure;

pub use error::RibbonError;
pub use mesh::{Mesh, MeshVertex, RibbonGeometry, SegmentMesh};
pub use options::Options;
pub use pipeline::{build_geometry, build_geometry_with};
pub use secondary_structure::SsType;
