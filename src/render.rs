use std::sync::Arc;

use springcurve::{FramePayload, MarkerRole, Point2D};
use vello::kurbo::{Affine, BezPath, Circle, Line, Point, Stroke};
use vello::peniko::{Color, Fill};
use vello::util::RenderSurface;
use vello::Scene;
use winit::window::Window;

// Simple struct to hold the state of the renderer
pub struct ActiveRenderState<'s> {
    pub surface: RenderSurface<'s>,
    pub window: Arc<Window>,
}

pub enum RenderState<'s> {
    Active(ActiveRenderState<'s>),
    Suspended(Option<Arc<Window>>),
}

const CURVE_COLOR: Color = Color::rgb8(0x00, 0xaa, 0xff);
const GUIDE_COLOR: Color = Color::rgba8(255, 255, 255, 51);
const TANGENT_COLOR: Color = Color::rgb8(0x00, 0xff, 0x88);
const FIXED_COLOR: Color = Color::rgb8(0xff, 0x44, 0x44);
const DYNAMIC_COLOR: Color = Color::rgb8(0xff, 0xaa, 0x00);

const CURVE_WIDTH: f64 = 4.0;
const TANGENT_WIDTH: f64 = 2.0;
const GUIDE_DASH: [f64; 2] = [5.0, 5.0];

fn point(p: &Point2D) -> Point {
    Point::new(p.x, p.y)
}

/// Color and radius a marker is drawn with.
pub fn marker_style(role: MarkerRole) -> (Color, f64) {
    match role {
        MarkerRole::Fixed => (FIXED_COLOR, 5.0),
        MarkerRole::Dynamic => (DYNAMIC_COLOR, 5.0),
        MarkerRole::Tangent => (TANGENT_COLOR, 3.0),
    }
}

/// Encodes one frame into `scene`: dashed guides, the curve, tangents, then
/// the marker dots on top.
pub fn paint_frame(scene: &mut Scene, payload: &FramePayload) {
    let guide = Stroke::new(1.0).with_dashes(0.0, GUIDE_DASH);
    for segment in &payload.control_lines {
        let line = Line::new(point(&segment.from), point(&segment.to));
        scene.stroke(&guide, Affine::IDENTITY, GUIDE_COLOR, None, &line);
    }

    let mut path = BezPath::new();
    path.move_to(point(&payload.curve.start));
    for sample in &payload.polyline {
        path.line_to(point(sample));
    }
    scene.stroke(&Stroke::new(CURVE_WIDTH), Affine::IDENTITY, CURVE_COLOR, None, &path);

    for tangent in payload.tangents.iter().filter(|t| !t.is_degenerate()) {
        let line = Line::new(point(&tangent.origin), point(&tangent.end));
        scene.stroke(&Stroke::new(TANGENT_WIDTH), Affine::IDENTITY, TANGENT_COLOR, None, &line);
    }

    for marker in &payload.markers {
        let (color, radius) = marker_style(marker.role);
        let dot = Circle::new(point(&marker.position), radius);
        scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &dot);
    }
}
