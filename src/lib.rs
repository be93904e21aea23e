//! A cubic Bézier curve whose inner control points are damped springs.
//!
//! The control points rest at fixed fractions of the viewport and are pulled
//! toward the pointer while it hovers. [`FrameDriver::step`] advances the
//! springs by one frame and returns the sampled geometry as a
//! [`FramePayload`] for whatever renderer the host uses.

pub mod components;
pub mod constants;
pub mod driver;
pub mod error;
pub mod math;
pub mod payload;
pub mod resources;
pub mod systems;

pub use components::control::ControlSlot;
pub use components::shapes::bezier::BezierCurve;
pub use components::spring::{SpringParams, SpringPoint};
pub use driver::FrameDriver;
pub use error::SimulationError;
pub use payload::{FramePayload, Marker, MarkerRole, Segment, TangentSegment};
pub use resources::{Endpoints, PointerState, Viewport};

/// A 2D coordinate in window pixels.
pub type Point2D = nalgebra::Vector2<f64>;
