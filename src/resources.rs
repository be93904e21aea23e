//! Frame-global inputs shared by the simulation systems.

use bevy_ecs::system::Resource;
use nalgebra::Vector2 as Vec2;

use crate::constants::ENDPOINT_MARGIN_FRACTION;
use crate::error::SimulationError;
use crate::Point2D;

/// Size of the drawable area. Always finite and strictly positive.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, SimulationError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimulationError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }
}

/// Last known pointer location and whether it currently pulls on the curve.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl PointerState {
    pub fn position(&self) -> Point2D {
        Vec2::new(self.x, self.y)
    }
}

/// Fixed curve endpoints, only recomputed when the viewport changes.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub start: Point2D,
    pub end: Point2D,
}

impl Endpoints {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let margin = viewport.width() * ENDPOINT_MARGIN_FRACTION;
        Self {
            start: Vec2::new(margin, viewport.center_y()),
            end: Vec2::new(viewport.width() - margin, viewport.center_y()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rejects_unmeasured_sizes() {
        assert_eq!(
            Viewport::new(0.0, 600.0),
            Err(SimulationError::InvalidViewport { width: 0.0, height: 600.0 })
        );
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f64::INFINITY, 600.0).is_err());
        assert!(Viewport::new(800.0, f64::NAN).is_err());
    }

    #[test]
    fn endpoints_are_inset_by_ten_percent() {
        let viewport = Viewport::new(800.0, 600.0).unwrap();
        let endpoints = Endpoints::for_viewport(&viewport);

        assert_eq!(endpoints.start, Vec2::new(80.0, 300.0));
        assert_eq!(endpoints.end, Vec2::new(720.0, 300.0));
    }
}
