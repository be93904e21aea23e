use bevy_ecs::system::{Query, Res};
use nalgebra::Vector2 as Vec2;

use crate::components::control::ControlSlot;
use crate::components::spring::SpringPoint;
use crate::constants::POINTER_INFLUENCE;
use crate::resources::{PointerState, Viewport};
use crate::Point2D;

/// Rest position of a control point for the given viewport.
pub fn baseline_target(slot: ControlSlot, viewport: &Viewport) -> Point2D {
    Vec2::new(viewport.width() * slot.width_fraction(), viewport.center_y())
}

pub fn baseline_targets(viewport: &Viewport) -> [Point2D; 2] {
    ControlSlot::ALL.map(|slot| baseline_target(slot, viewport))
}

/// Target for one control point this frame.
///
/// Always blended fresh from the baseline, so nothing carries over between
/// frames.
pub fn compute_target(slot: ControlSlot, viewport: &Viewport, pointer: &PointerState) -> Point2D {
    let baseline = baseline_target(slot, viewport);
    if !pointer.active {
        return baseline;
    }
    baseline + (pointer.position() - baseline) * POINTER_INFLUENCE
}

pub fn compute_targets(viewport: &Viewport, pointer: &PointerState) -> [Point2D; 2] {
    ControlSlot::ALL.map(|slot| compute_target(slot, viewport, pointer))
}

pub fn sys_update_targets(
    viewport: Res<Viewport>,
    pointer: Res<PointerState>,
    mut query: Query<(&ControlSlot, &mut SpringPoint)>,
) {
    for (slot, mut spring) in query.iter_mut() {
        let target = compute_target(*slot, &viewport, &pointer);
        spring.set_target(target.x, target.y);
    }
}
