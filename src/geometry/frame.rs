//! Tangent computation and parallel-transport frame propagation.
//!
//! Frenet frames flip abruptly at inflection points, so the ribbon
//! frame is propagated by minimal rotation between consecutive
//! tangents instead: each normal is the previous normal rotated by the
//! rotation carrying the previous tangent onto the current one. The
//! result is a continuously varying cross-section orientation, which
//! the extruder relies on to avoid visible twisting.

use glam::Vec3;

/// Tangent changes with a cross product smaller than this are treated
/// as no rotation.
const AXIS_EPS_SQ: f32 = 1e-10;

/// A curve sample with its orientation frame.
///
/// Invariants maintained by [`propagate_frames`]: tangent and normal
/// are unit length and mutually orthogonal at every sample.
#[derive(Debug, Clone, Copy)]
pub struct CurvePoint {
    /// Position on the sampled curve.
    pub position: Vec3,
    /// Unit tangent along the curve.
    pub tangent: Vec3,
    /// Unit normal, orthogonal to the tangent.
    pub normal: Vec3,
}

impl CurvePoint {
    /// Binormal completing the right-handed frame.
    #[must_use]
    pub fn binormal(&self) -> Vec3 {
        self.tangent.cross(self.normal)
    }
}

/// Rodrigues rotation of `v` about a unit `axis` by `angle`.
fn rotate_about(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(v) * sin + axis * (axis.dot(v) * (1.0 - cos))
}

/// Unit tangents via central differences, one-sided at the endpoints.
///
/// Coincident adjacent samples would normalize to zero; those fall
/// back to the previous valid tangent direction.
fn compute_tangents(points: &[Vec3]) -> Vec<Vec3> {
    let n = points.len();
    let mut tangents = Vec::with_capacity(n);
    let mut last_valid: Option<Vec3> = None;
    for i in 0..n {
        let raw = if i == 0 {
            points[1] - points[0]
        } else if i == n - 1 {
            points[n - 1] - points[n - 2]
        } else {
            points[i + 1] - points[i - 1]
        };
        let tangent = raw
            .try_normalize()
            .or(last_valid)
            .unwrap_or(Vec3::X);
        last_valid = Some(tangent);
        tangents.push(tangent);
    }
    tangents
}

/// First-frame normal: an arbitrary axis not nearly parallel to the
/// tangent, projected orthogonal to it.
fn initial_normal(tangent: Vec3) -> Vec3 {
    let arbitrary = if tangent.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    (arbitrary - tangent * tangent.dot(arbitrary))
        .try_normalize()
        .unwrap_or(Vec3::Y)
}

/// Compute per-sample frames for a sampled curve by parallel transport.
///
/// Fewer than 2 points yield no frames (the segment is dropped
/// downstream). Every sample gets its own tangent and normal computed
/// at that sample's position; frames are never reused from a neighbor
/// except as the degenerate-rotation fallback.
#[must_use]
pub fn propagate_frames(points: &[Vec3]) -> Vec<CurvePoint> {
    if points.len() < 2 {
        return Vec::new();
    }

    let tangents = compute_tangents(points);
    let mut frames = Vec::with_capacity(points.len());
    frames.push(CurvePoint {
        position: points[0],
        tangent: tangents[0],
        normal: initial_normal(tangents[0]),
    });

    for i in 1..points.len() {
        let prev = frames[i - 1];
        let tangent = tangents[i];
        let axis = prev.tangent.cross(tangent);

        let transported = if axis.length_squared() < AXIS_EPS_SQ {
            // Negligible tangent change: carry the frame unrotated.
            prev.normal
        } else {
            let angle = prev.tangent.dot(tangent).clamp(-1.0, 1.0).acos();
            rotate_about(prev.normal, axis.normalize(), angle)
        };

        // Re-orthogonalize against the new tangent to stop numeric
        // drift from accumulating along long curves.
        let normal = (transported - tangent * tangent.dot(transported))
            .try_normalize()
            .unwrap_or(prev.normal);

        frames.push(CurvePoint { position: points[i], tangent, normal });
    }
    frames
}
