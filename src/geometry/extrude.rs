//! Per-segment mesh extrusion: helix ribbons, sheet arrow ribbons,
//! coil tubes.
//!
//! All variants map texture u to cross-sectional position and v to
//! arc-length fraction, and keep triangle winding consistent per face
//! so back-face culling downstream never hides an intended-visible
//! surface. Ribbons are emitted double-sided for the same reason.

use glam::Vec3;

use super::frame::CurvePoint;
use crate::mesh::{Mesh, MeshVertex};
use crate::options::GeometryOptions;
use crate::secondary_structure::SsType;

/// Extrude a sampled curve into the mesh variant for its type.
///
/// Curves with fewer than 2 samples yield an empty mesh.
#[must_use]
pub fn extrude_segment(
    curve: &[CurvePoint],
    ss_type: SsType,
    geo: &GeometryOptions,
) -> Mesh {
    match ss_type {
        SsType::Helix => ribbon(curve, geo.helix_width, geo.helix_thickness, None),
        SsType::Sheet => ribbon(
            curve,
            geo.sheet_width,
            geo.sheet_thickness,
            Some((geo.arrow_taper_fraction, geo.arrow_width_multiplier)),
        ),
        SsType::Coil => {
            tube(curve, geo.tube_radius, geo.tube_radial_segments.max(3) as usize)
        }
    }
}

/// Arc-length fraction 0..1 at each sample; index fraction when the
/// curve has no length.
fn arc_fractions(curve: &[CurvePoint]) -> Vec<f32> {
    let n = curve.len();
    let mut cumulative = Vec::with_capacity(n);
    let mut total = 0.0_f32;
    cumulative.push(0.0);
    for pair in curve.windows(2) {
        total += pair[0].position.distance(pair[1].position);
        cumulative.push(total);
    }
    if total > f32::EPSILON {
        cumulative.iter().map(|&s| s / total).collect()
    } else {
        (0..n)
            .map(|i| i as f32 / (n - 1).max(1) as f32)
            .collect()
    }
}

/// Half-width scale at sample `i` for the arrowhead taper: 1 outside
/// the tail fraction, ramping linearly to the multiplier at the
/// C-terminal sample.
fn taper_scale(i: usize, n: usize, taper: Option<(f32, f32)>) -> f32 {
    let Some((fraction, multiplier)) = taper else {
        return 1.0;
    };
    let span = (n - 1) as f32;
    let tail_start = span * (1.0 - fraction.clamp(0.0, 1.0));
    let denom = span - tail_start;
    if (i as f32) <= tail_start || denom <= f32::EPSILON {
        1.0
    } else {
        1.0 + (multiplier - 1.0) * ((i as f32 - tail_start) / denom)
    }
}

/// Flat double-sided ribbon, three vertices across (left edge, center,
/// right edge), front and back faces separated by the thickness.
///
/// Per consecutive sample pair the front face is two quads (4
/// triangles) and the back face mirrors them with reversed winding,
/// 8 triangles per pair in total.
fn ribbon(
    curve: &[CurvePoint],
    width: f32,
    thickness: f32,
    taper: Option<(f32, f32)>,
) -> Mesh {
    let n = curve.len();
    if n < 2 {
        return Mesh::default();
    }
    let arc = arc_fractions(curve);
    let half_width = width * 0.5;
    let half_thickness = thickness * 0.5;

    let mut vertices = Vec::with_capacity(6 * n);
    // Front block: [0, 3n), back block: [3n, 6n).
    for face in [1.0_f32, -1.0] {
        for (i, frame) in curve.iter().enumerate() {
            let binormal = frame.binormal();
            let edge = binormal * (half_width * taper_scale(i, n, taper));
            let lift = frame.normal * (half_thickness * face);
            let normal = (frame.normal * face).into();
            let v = arc[i];
            for (offset, u) in [(-edge, 0.0_f32), (Vec3::ZERO, 0.5), (edge, 1.0)] {
                vertices.push(MeshVertex {
                    position: (frame.position + offset + lift).into(),
                    normal,
                    texcoord: [u, v],
                });
            }
        }
    }

    let back_base = 3 * n as u32;
    let mut indices = Vec::with_capacity(24 * (n - 1));
    for i in 0..n - 1 {
        let row = 3 * i as u32;
        let next = row + 3;
        // Two quads across the width: (left, center) and (center, right).
        for k in 0..2_u32 {
            let a = row + k; // this row, left corner of the quad
            let b = next + k; // next row, left corner
            // Front face, wound toward +normal.
            indices.extend_from_slice(&[a, a + 1, b]);
            indices.extend_from_slice(&[a + 1, b + 1, b]);
            // Back face, reversed winding toward -normal.
            let (a, b) = (back_base + a, back_base + b);
            indices.extend_from_slice(&[a, b, a + 1]);
            indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// Circular tube: a ring of `radial_segments` vertices per sample with
/// outward radial normals, consecutive rings stitched with two
/// triangles per radial segment, wrapping modulo the ring size.
fn tube(curve: &[CurvePoint], radius: f32, radial_segments: usize) -> Mesh {
    let n = curve.len();
    if n < 2 {
        return Mesh::default();
    }
    let m = radial_segments;
    let arc = arc_fractions(curve);

    let mut vertices = Vec::with_capacity(m * n);
    for (i, frame) in curve.iter().enumerate() {
        let binormal = frame.binormal();
        for k in 0..m {
            let theta = (k as f32 / m as f32) * std::f32::consts::TAU;
            let radial = frame.normal * theta.cos() + binormal * theta.sin();
            vertices.push(MeshVertex {
                position: (frame.position + radial * radius).into(),
                normal: radial.into(),
                texcoord: [k as f32 / m as f32, arc[i]],
            });
        }
    }

    let mut indices = Vec::with_capacity(6 * m * (n - 1));
    for i in 0..n - 1 {
        let ring = (i * m) as u32;
        let next = ring + m as u32;
        for k in 0..m as u32 {
            let k_next = (k + 1) % m as u32;
            indices.extend_from_slice(&[ring + k, ring + k_next, next + k]);
            indices.extend_from_slice(&[ring + k_next, next + k_next, next + k]);
        }
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::frame::propagate_frames;

    fn straight_curve(n: usize) -> Vec<CurvePoint> {
        let points: Vec<Vec3> =
            (0..n).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        propagate_frames(&points)
    }

    fn assert_indices_valid(mesh: &Mesh) {
        assert_eq!(mesh.indices.len() % 3, 0);
        for tri in mesh.indices.chunks(3) {
            for &i in tri {
                assert!((i as usize) < mesh.vertices.len(), "{tri:?}");
            }
            assert!(
                tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2],
                "degenerate triangle {tri:?}"
            );
        }
    }

    #[test]
    fn test_ribbon_counts() {
        let curve = straight_curve(7);
        let geo = GeometryOptions::default();
        let mesh = extrude_segment(&curve, SsType::Helix, &geo);
        assert_eq!(mesh.vertices.len(), 6 * 7);
        assert_eq!(mesh.triangle_count(), 8 * (7 - 1));
        assert_indices_valid(&mesh);
    }

    #[test]
    fn test_ribbon_width_and_double_sidedness() {
        let curve = straight_curve(4);
        let geo = GeometryOptions::default();
        let mesh = extrude_segment(&curve, SsType::Helix, &geo);

        // Left/right edge separation matches the configured width.
        let n = curve.len();
        let left = Vec3::from(mesh.vertices[0].position);
        let right = Vec3::from(mesh.vertices[2].position);
        assert!((left.distance(right) - geo.helix_width).abs() < 1e-4);

        // Front and back normals oppose.
        let front = Vec3::from(mesh.vertices[0].normal);
        let back = Vec3::from(mesh.vertices[3 * n].normal);
        assert!(front.distance(-back) < 1e-5);

        // Faces sit half a thickness either side of the curve.
        let back_pos = Vec3::from(mesh.vertices[3 * n].position);
        assert!(
            (left.distance(back_pos) - geo.helix_thickness).abs() < 1e-4
        );
    }

    #[test]
    fn test_sheet_arrowhead_taper() {
        let curve = straight_curve(9);
        let geo = GeometryOptions::default();
        let mesh = extrude_segment(&curve, SsType::Sheet, &geo);
        assert_eq!(mesh.triangle_count(), 8 * (9 - 1));

        let n = curve.len();
        let tip_left = Vec3::from(mesh.vertices[3 * (n - 1)].position);
        let tip_right = Vec3::from(mesh.vertices[3 * (n - 1) + 2].position);
        let expected = geo.sheet_width * geo.arrow_width_multiplier;
        assert!((tip_left.distance(tip_right) - expected).abs() < 1e-3);

        // Width before the tail is the base width.
        let first_left = Vec3::from(mesh.vertices[0].position);
        let first_right = Vec3::from(mesh.vertices[2].position);
        assert!(
            (first_left.distance(first_right) - geo.sheet_width).abs()
                < 1e-4
        );
    }

    #[test]
    fn test_tube_counts_and_normals() {
        let curve = straight_curve(5);
        let geo = GeometryOptions::default();
        let m = geo.tube_radial_segments as usize;
        let mesh = extrude_segment(&curve, SsType::Coil, &geo);

        assert_eq!(mesh.vertices.len(), m * 5);
        assert_eq!(mesh.triangle_count(), 2 * m * (5 - 1));
        assert_indices_valid(&mesh);

        // Radial normals are unit length and orthogonal to the axis.
        for v in &mesh.vertices {
            let normal = Vec3::from(v.normal);
            assert!((normal.length() - 1.0).abs() < 1e-4);
            assert!(normal.dot(Vec3::X).abs() < 1e-4);
        }
    }

    #[test]
    fn test_texcoords_in_unit_range() {
        let curve = straight_curve(6);
        let geo = GeometryOptions::default();
        for ss in [SsType::Helix, SsType::Sheet, SsType::Coil] {
            let mesh = extrude_segment(&curve, ss, &geo);
            for v in &mesh.vertices {
                assert!((0.0..=1.0).contains(&v.texcoord[0]), "{v:?}");
                assert!((0.0..=1.0).contains(&v.texcoord[1]), "{v:?}");
            }
        }
        // v spans the whole curve.
        let mesh = extrude_segment(&curve, SsType::Coil, &geo);
        assert_eq!(mesh.vertices[0].texcoord[1], 0.0);
        assert_eq!(
            mesh.vertices.last().map(|v| v.texcoord[1]),
            Some(1.0)
        );
    }

    #[test]
    fn test_short_curve_yields_empty_mesh() {
        let geo = GeometryOptions::default();
        for ss in [SsType::Helix, SsType::Sheet, SsType::Coil] {
            assert!(extrude_segment(&[], ss, &geo).is_empty());
            let single = straight_curve(2).remove(0);
            assert!(extrude_segment(&[single], ss, &geo).is_empty());
        }
    }
}
