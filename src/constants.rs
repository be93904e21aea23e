//! Fixed tuning constants for the simulation and the curve sampling.

/// Spring constant `k`.
pub const SPRING_STIFFNESS: f64 = 0.1;
/// Multiplicative velocity decay applied once per step.
pub const SPRING_DAMPING: f64 = 0.85;
pub const SPRING_MASS: f64 = 1.0;

/// Rest position of the first control point, as a fraction of the width.
pub const FIRST_CONTROL_FRACTION: f64 = 0.33;
/// Rest position of the second control point, as a fraction of the width.
pub const SECOND_CONTROL_FRACTION: f64 = 0.66;
/// Horizontal inset of the fixed endpoints, as a fraction of the width.
pub const ENDPOINT_MARGIN_FRACTION: f64 = 0.1;

/// How far each rest target is pulled toward an active pointer.
pub const POINTER_INFLUENCE: f64 = 0.6;

/// Number of uniform steps used to approximate the curve.
pub const CURVE_SAMPLES: usize = 100;
/// Curve parameters at which decorative tangents are drawn.
pub const TANGENT_PARAMS: [f64; 3] = [0.2, 0.5, 0.8];
/// Length of a drawn tangent segment, in pixels.
pub const TANGENT_LENGTH: f64 = 40.0;
