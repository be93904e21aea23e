use rayon::prelude::*;

use crate::components::shapes::bezier::BezierCurve;
use crate::payload::TangentSegment;
use crate::Point2D;

/// Samples the curve at `t = i / steps` for `i` in `1..=steps`.
///
/// `t = 0` is left out because a path starts at the curve's first endpoint.
pub fn sample_polyline(curve: &BezierCurve, steps: usize) -> Vec<Point2D> {
    (1..=steps)
        .into_par_iter()
        .map(|i| curve.point_at(i as f64 / steps as f64))
        .collect()
}

pub fn sample_tangents(curve: &BezierCurve, params: &[f64], length: f64) -> Vec<TangentSegment> {
    params
        .iter()
        .map(|&t| {
            let origin = curve.point_at(t);
            let direction = curve.tangent_at(t);
            TangentSegment {
                t,
                origin,
                direction,
                end: origin + direction * length,
            }
        })
        .collect()
}
