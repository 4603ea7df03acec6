use glam::Vec3;

use super::event::PointerButton;
use super::keyboard::NavAction;

/// Speed multiplier applied while the fast-movement modifier is held.
const FAST_MULTIPLIER: f32 = 10.0;

/// Continuous movement intent driven by key state.
///
/// `axes` components stay in {-1, 0, 1}: camera-space x for strafing,
/// z for forward/back (-1 is toward the view direction). A key release
/// clears its axis unconditionally, even if the opposite key is still
/// physically held — last key-down wins, stale releases still clear.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    /// Per-axis direction flags, camera-local.
    pub axes: Vec3,
    /// Whether the fast-movement modifier is held.
    pub fast: bool,
}

impl MoveIntent {
    /// Fresh intent with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key state change for a bound action.
    pub fn apply(&mut self, action: NavAction, pressed: bool) {
        let held = if pressed { 1.0 } else { 0.0 };
        match action {
            NavAction::MoveForward => self.axes.z = -held,
            NavAction::MoveBackward => self.axes.z = held,
            NavAction::MoveLeft => self.axes.x = -held,
            NavAction::MoveRight => self.axes.x = held,
            NavAction::FastModifier => self.fast = pressed,
        }
    }

    /// Whether any axis is active.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.axes != Vec3::ZERO
    }

    /// Speed factor from the fast modifier.
    #[must_use]
    pub fn speed_multiplier(&self) -> f32 {
        if self.fast {
            FAST_MULTIPLIER
        } else {
            1.0
        }
    }
}

/// Drag bookkeeping captured at pointer-down and consumed on each
/// subsequent pointer-move of the same drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// World-space anchor from the drag-start ray/plane intersection;
    /// `None` when the intersection missed (drag deltas are then
    /// skipped).
    pub anchor: Option<Vec3>,
    /// The button that initiated the drag; selects the sub-behavior in
    /// Plane mode.
    pub button: PointerButton,
}
