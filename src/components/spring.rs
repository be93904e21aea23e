use bevy_ecs::component::Component;
use nalgebra::Vector2 as Vec2;

use crate::constants::{SPRING_DAMPING, SPRING_MASS, SPRING_STIFFNESS};
use crate::error::SimulationError;
use crate::Point2D;

/// Physical constants of a spring, checked once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl SpringParams {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, SimulationError> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(SimulationError::InvalidSpring("stiffness must be finite and positive"));
        }
        // damping >= 1 never bleeds off energy
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(SimulationError::InvalidSpring("damping must lie in (0, 1]"));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimulationError::InvalidSpring("mass must be finite and positive"));
        }
        Ok(Self { stiffness, damping, mass })
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

/// A control point pulled toward `target` by a damped spring.
///
/// There is no terminal state: the point keeps settling toward whatever
/// target it was last given.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpringPoint {
    pub position: Point2D,
    pub target: Point2D,
    pub velocity: Point2D,
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringPoint {
    /// A spring at rest on `position` with the default constants.
    pub fn new(position: Point2D) -> Self {
        Self::with_params(position, SpringParams::default())
    }

    pub fn with_params(position: Point2D, params: SpringParams) -> Self {
        Self {
            position,
            target: position,
            velocity: Vec2::zeros(),
            stiffness: params.stiffness,
            damping: params.damping,
            mass: params.mass,
        }
    }

    /// Only the target changes; position and velocity move on the next `update`.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = Vec2::new(x, y);
    }

    /// Advances one fixed step.
    ///
    /// Damping is applied to the velocity after the spring force and before
    /// the position moves. The tuning constants depend on this order.
    pub fn update(&mut self) {
        let force = -self.stiffness * (self.position - self.target);
        let acceleration = force / self.mass;

        self.velocity += acceleration;
        self.velocity *= self.damping;

        self.position += self.velocity;
    }

    /// Puts the point at rest on `position`, dropping any momentum.
    pub fn snap_to(&mut self, position: Point2D) {
        self.position = position;
        self.target = position;
        self.velocity = Vec2::zeros();
    }
}
