use nalgebra::Vector2 as Vec2;

use crate::Point2D;

/// Evaluates a cubic Bézier in Bernstein form.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate past the endpoints.
pub fn evaluate_cubic_bezier(t: f64, p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> Point2D {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    let t2 = t * t;
    let t3 = t2 * t;

    p0 * mt3 + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * t3
}

/// Unit direction of the curve's derivative at `t`.
///
/// Returns the zero vector when the derivative vanishes (coincident control
/// points), which callers read as "no defined direction".
pub fn evaluate_tangent(t: f64, p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> Point2D {
    let mt = 1.0 - t;

    let derivative = (p1 - p0) * (3.0 * mt * mt)
        + (p2 - p1) * (6.0 * mt * t)
        + (p3 - p2) * (3.0 * t * t);

    let length = derivative.norm();
    if length == 0.0 {
        return Vec2::zeros();
    }

    derivative / length
}
