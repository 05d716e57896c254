//! Curve fitting, frame propagation, and mesh extrusion.
//!
//! Pure Vec3 math with no renderer dependencies. Each segment flows
//! through [`spline::sample_curve`], then [`frame::propagate_frames`],
//! then [`extrude::extrude_segment`].

pub mod extrude;
pub mod frame;
pub mod spline;

pub use frame::CurvePoint;
