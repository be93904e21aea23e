use crate::math::bezier::{evaluate_cubic_bezier, evaluate_tangent};
use crate::Point2D;

/// The four points of the animated curve: fixed endpoints around two live
/// control points. Rebuilt every frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve {
    pub start: Point2D,
    pub control1: Point2D,
    pub control2: Point2D,
    pub end: Point2D,
}

impl BezierCurve {
    pub fn new(start: Point2D, control1: Point2D, control2: Point2D, end: Point2D) -> Self {
        Self { start, control1, control2, end }
    }

    pub fn point_at(&self, t: f64) -> Point2D {
        evaluate_cubic_bezier(t, self.start, self.control1, self.control2, self.end)
    }

    pub fn tangent_at(&self, t: f64) -> Point2D {
        evaluate_tangent(t, self.start, self.control1, self.control2, self.end)
    }
}
