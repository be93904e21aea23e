//! Error types for the simulation core.

use thiserror::Error;

use crate::components::control::ControlSlot;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// The viewport has to be measured before the first frame.
    #[error("viewport must have finite, positive dimensions (got {width}x{height})")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid spring parameters: {0}")]
    InvalidSpring(&'static str),

    #[error("control point {0:?} is missing from the simulation world")]
    MissingControlPoint(ControlSlot),
}
