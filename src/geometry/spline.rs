//! Cubic B-spline evaluation and adaptive curve sampling.
//!
//! The basis functions are evaluated with the iterative Cox-de Boor
//! triangular table over a clamped uniform knot vector, so the curve
//! interpolates its end guide points and degenerate knot spans
//! contribute zero weight instead of dividing by zero.

use glam::Vec3;

use crate::options::GeometryOptions;

/// Recursion bound for midpoint refinement between two uniform samples.
const MAX_REFINE_DEPTH: u32 = 6;

/// Denominators below this are treated as degenerate knot spans.
const KNOT_EPS: f32 = 1e-6;

/// A uniform cubic B-spline over a segment's guide points.
///
/// Degree degrades to `n - 1` for very short segments so two or three
/// guide points still yield a usable curve.
pub(crate) struct BSpline {
    points: Vec<Vec3>,
    degree: usize,
    knots: Vec<f32>,
}

impl BSpline {
    /// Fit a spline through the guide points. `None` for fewer than 2.
    pub(crate) fn new(points: &[Vec3]) -> Option<Self> {
        let n = points.len();
        if n < 2 {
            return None;
        }
        let degree = 3.min(n - 1);

        // Clamped uniform knot vector: full multiplicity at both ends,
        // evenly spaced interior knots.
        let interior = n - degree - 1;
        let mut knots = vec![0.0; degree + 1];
        for k in 1..=interior {
            knots.push(k as f32 / (interior + 1) as f32);
        }
        knots.extend(vec![1.0; degree + 1]);

        Some(Self { points: points.to_vec(), degree, knots })
    }

    /// Evaluate the curve position at parameter `t` in `[0, 1]`.
    pub(crate) fn evaluate(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let spans = self.knots.len() - 1;
        let mut basis = vec![0.0_f32; spans];

        // Degree 0: indicator of the knot span containing t. At the
        // right end no half-open span contains t, so the last
        // non-degenerate span takes it.
        let span = (0..spans)
            .find(|&i| self.knots[i] <= t && t < self.knots[i + 1])
            .or_else(|| {
                (0..spans).rev().find(|&i| self.knots[i] < self.knots[i + 1])
            });
        let Some(span) = span else {
            return self.points[0];
        };
        basis[span] = 1.0;

        // Triangular table, in place, degree by degree.
        for p in 1..=self.degree {
            for i in 0..spans - p {
                let left = ratio(t - self.knots[i], self.knots[i + p] - self.knots[i]);
                let right = ratio(
                    self.knots[i + p + 1] - t,
                    self.knots[i + p + 1] - self.knots[i + 1],
                );
                basis[i] = left * basis[i] + right * basis[i + 1];
            }
        }

        self.points
            .iter()
            .zip(&basis)
            .map(|(&p, &w)| p * w)
            .sum()
    }
}

/// Basis-function ratio with the degenerate-span guard: a zero-width
/// knot span contributes zero weight rather than a division fault.
#[inline]
fn ratio(num: f32, den: f32) -> f32 {
    if den.abs() < KNOT_EPS {
        0.0
    } else {
        num / den
    }
}

/// Sample a segment's curve with adaptive refinement.
///
/// The curve is evaluated at `max_uniform_steps` uniform parameter
/// steps; between adjacent samples a midpoint is inserted whenever the
/// chord exceeds `max_chord_length` or the curve midpoint deviates from
/// the straight-line midpoint by more than `curvature_tolerance`,
/// recursively, so tight turns sample densely while straight runs stay
/// at the base count. Fewer than 2 guide points yield an empty curve.
#[must_use]
pub fn sample_curve(guide_points: &[Vec3], geo: &GeometryOptions) -> Vec<Vec3> {
    let Some(spline) = BSpline::new(guide_points) else {
        return Vec::new();
    };
    let steps = geo.max_uniform_steps.max(1) as usize;

    let uniform: Vec<(f32, Vec3)> = (0..=steps)
        .map(|j| {
            let t = j as f32 / steps as f32;
            (t, spline.evaluate(t))
        })
        .collect();

    let mut out = Vec::with_capacity(uniform.len());
    out.push(uniform[0].1);
    for pair in uniform.windows(2) {
        let (t0, p0) = pair[0];
        let (t1, p1) = pair[1];
        refine(&spline, t0, p0, t1, p1, MAX_REFINE_DEPTH, geo, &mut out);
    }
    out
}

/// Append the refined samples of `(t0, t1]` to `out`, in order.
///
/// Every inserted midpoint is a real curve evaluation at its own
/// parameter value; nothing downstream reuses a neighbor's sample.
#[allow(clippy::too_many_arguments)]
fn refine(
    spline: &BSpline,
    t0: f32,
    p0: Vec3,
    t1: f32,
    p1: Vec3,
    depth: u32,
    geo: &GeometryOptions,
    out: &mut Vec<Vec3>,
) {
    if depth > 0 {
        let tm = 0.5 * (t0 + t1);
        let pm = spline.evaluate(tm);
        let chord = p0.distance(p1);
        let deviation = pm.distance((p0 + p1) * 0.5);
        if chord > geo.max_chord_length || deviation > geo.curvature_tolerance {
            refine(spline, t0, p0, tm, pm, depth - 1, geo, out);
            refine(spline, tm, pm, t1, p1, depth - 1, geo, out);
            return;
        }
    }
    out.push(p1);
}
