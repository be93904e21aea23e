//! Backend-neutral geometry handed to the renderer once per frame.

use crate::components::shapes::bezier::BezierCurve;
use crate::Point2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2D,
    pub to: Point2D,
}

/// A tangent decoration anchored on the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentSegment {
    pub t: f64,
    pub origin: Point2D,
    /// Unit direction, or zero where the curve has no defined direction.
    pub direction: Point2D,
    pub end: Point2D,
}

impl TangentSegment {
    pub fn is_degenerate(&self) -> bool {
        self.direction.x == 0.0 && self.direction.y == 0.0
    }
}

/// Visual role of a marker dot; the renderer picks color and size from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    Fixed,
    Dynamic,
    Tangent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point2D,
    pub role: MarkerRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FramePayload {
    pub curve: BezierCurve,
    /// Samples for `t` in `(0, 1]`; the path itself starts at `curve.start`.
    pub polyline: Vec<Point2D>,
    pub tangents: Vec<TangentSegment>,
    /// Guide lines `P0 -> P1`, `P3 -> P2` and `P1 -> P2`.
    pub control_lines: [Segment; 3],
    /// In draw order: tangent origins, then fixed endpoints, then control points.
    pub markers: Vec<Marker>,
}

impl FramePayload {
    pub fn new(curve: BezierCurve, polyline: Vec<Point2D>, tangents: Vec<TangentSegment>) -> Self {
        let control_lines = [
            Segment { from: curve.start, to: curve.control1 },
            Segment { from: curve.end, to: curve.control2 },
            Segment { from: curve.control1, to: curve.control2 },
        ];

        let mut markers: Vec<Marker> = tangents
            .iter()
            .map(|tangent| Marker { position: tangent.origin, role: MarkerRole::Tangent })
            .collect();
        markers.extend([
            Marker { position: curve.start, role: MarkerRole::Fixed },
            Marker { position: curve.end, role: MarkerRole::Fixed },
            Marker { position: curve.control1, role: MarkerRole::Dynamic },
            Marker { position: curve.control2, role: MarkerRole::Dynamic },
        ]);

        Self { curve, polyline, tangents, control_lines, markers }
    }
}
