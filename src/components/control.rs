use bevy_ecs::component::Component;

use crate::constants::{FIRST_CONTROL_FRACTION, SECOND_CONTROL_FRACTION};

/// Which of the two inner control points an entity drives.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSlot {
    First,
    Second,
}

impl ControlSlot {
    pub const ALL: [ControlSlot; 2] = [ControlSlot::First, ControlSlot::Second];

    /// Horizontal rest position as a fraction of the viewport width.
    pub fn width_fraction(self) -> f64 {
        match self {
            ControlSlot::First => FIRST_CONTROL_FRACTION,
            ControlSlot::Second => SECOND_CONTROL_FRACTION,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ControlSlot::First => 0,
            ControlSlot::Second => 1,
        }
    }
}
