//! The per-frame simulation loop.
//!
//! [`FrameDriver`] owns the whole simulation context in a `bevy_ecs` world:
//! viewport, pointer and endpoints live there as resources and each animated
//! control point is an entity carrying a [`SpringPoint`] and its
//! [`ControlSlot`]. The driver never schedules itself. A host calls
//! [`FrameDriver::step`] once per display refresh, or tests call it by hand.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;

use crate::components::control::ControlSlot;
use crate::components::shapes::bezier::BezierCurve;
use crate::components::spring::{SpringParams, SpringPoint};
use crate::constants::{CURVE_SAMPLES, TANGENT_LENGTH, TANGENT_PARAMS};
use crate::error::SimulationError;
use crate::math::sampling::{sample_polyline, sample_tangents};
use crate::payload::FramePayload;
use crate::resources::{Endpoints, PointerState, Viewport};
use crate::systems::integrate_springs::sys_integrate_springs;
use crate::systems::target_policy::{baseline_target, sys_update_targets};

pub struct FrameDriver {
    world: World,
    schedule: Schedule,
    controls: [Entity; 2],
    frame: u64,
}

impl FrameDriver {
    /// Builds the simulation with both control points resting on their
    /// baselines. Requiring a measured viewport here means no frame can ever
    /// run against an unknown size.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_params(viewport, SpringParams::default())
    }

    pub fn with_params(viewport: Viewport, params: SpringParams) -> Self {
        let mut world = World::new();
        world.insert_resource(viewport);
        world.insert_resource(PointerState::default());
        world.insert_resource(Endpoints::for_viewport(&viewport));

        let controls = ControlSlot::ALL.map(|slot| {
            let rest = baseline_target(slot, &viewport);
            world.spawn((slot, SpringPoint::with_params(rest, params))).id()
        });

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        // targets must be in place before any spring integrates
        schedule.add_systems((sys_update_targets, sys_integrate_springs).chain());

        log::debug!(
            "simulation created for {}x{} viewport",
            viewport.width(),
            viewport.height()
        );

        Self {
            world,
            schedule,
            controls,
            frame: 0,
        }
    }

    /// Runs one frame: targets, integration, then sampling.
    pub fn step(&mut self) -> Result<FramePayload, SimulationError> {
        self.schedule.run(&mut self.world);
        self.frame += 1;

        let curve = self.curve()?;
        let polyline = sample_polyline(&curve, CURVE_SAMPLES);
        let tangents = sample_tangents(&curve, &TANGENT_PARAMS, TANGENT_LENGTH);

        log::trace!(
            "frame {}: cp1=({:.2}, {:.2}) cp2=({:.2}, {:.2})",
            self.frame,
            curve.control1.x,
            curve.control1.y,
            curve.control2.x,
            curve.control2.y
        );

        Ok(FramePayload::new(curve, polyline, tangents))
    }

    /// Moves the rest positions and endpoints. The springs keep their state
    /// and glide to the new layout over the following frames.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("viewport resized to {}x{}", viewport.width(), viewport.height());
        self.world.insert_resource(viewport);
        self.world.insert_resource(Endpoints::for_viewport(&viewport));
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        let mut pointer = self.world.resource_mut::<PointerState>();
        if !pointer.active {
            log::debug!("pointer entered at ({x:.1}, {y:.1})");
        }
        *pointer = PointerState { x, y, active: true };
    }

    /// Stops the pointer from pulling on the curve; its last position is kept.
    pub fn release_pointer(&mut self) {
        let mut pointer = self.world.resource_mut::<PointerState>();
        if pointer.active {
            log::debug!("pointer released");
        }
        pointer.active = false;
    }

    /// Snaps both control points back to rest on their baselines.
    pub fn reset(&mut self) {
        let viewport = self.viewport();
        let mut query = self.world.query::<(&ControlSlot, &mut SpringPoint)>();
        for (slot, mut spring) in query.iter_mut(&mut self.world) {
            spring.snap_to(baseline_target(*slot, &viewport));
        }
        log::debug!("control points reset to rest");
    }

    pub fn viewport(&self) -> Viewport {
        *self.world.resource::<Viewport>()
    }

    pub fn pointer(&self) -> PointerState {
        *self.world.resource::<PointerState>()
    }

    pub fn endpoints(&self) -> Endpoints {
        *self.world.resource::<Endpoints>()
    }

    pub fn spring(&self, slot: ControlSlot) -> Result<&SpringPoint, SimulationError> {
        self.world
            .get::<SpringPoint>(self.controls[slot.index()])
            .ok_or(SimulationError::MissingControlPoint(slot))
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn curve(&self) -> Result<BezierCurve, SimulationError> {
        let endpoints = self.endpoints();
        Ok(BezierCurve::new(
            endpoints.start,
            self.spring(ControlSlot::First)?.position,
            self.spring(ControlSlot::Second)?.position,
            endpoints.end,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2 as Vec2;

    #[test]
    fn springs_start_on_their_baselines() {
        let driver = FrameDriver::new(Viewport::new(1000.0, 500.0).unwrap());

        let first = driver.spring(ControlSlot::First).unwrap();
        let second = driver.spring(ControlSlot::Second).unwrap();
        assert_eq!(first.position, Vec2::new(330.0, 250.0));
        assert_eq!(second.position, Vec2::new(660.0, 250.0));
        assert_eq!(first.velocity, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn release_keeps_last_pointer_position() {
        let mut driver = FrameDriver::new(Viewport::new(800.0, 600.0).unwrap());
        driver.set_pointer(12.0, 34.0);
        driver.release_pointer();

        assert_eq!(driver.pointer(), PointerState { x: 12.0, y: 34.0, active: false });
    }

    #[test]
    fn step_counts_frames() {
        let mut driver = FrameDriver::new(Viewport::new(800.0, 600.0).unwrap());
        for _ in 0..3 {
            driver.step().unwrap();
        }
        assert_eq!(driver.frame(), 3);
    }
}
