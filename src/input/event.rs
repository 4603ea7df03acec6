//! Platform-agnostic scene input events.
//!
//! These are fed into [`Scene::dispatch`](crate::scene::Scene::dispatch),
//! which routes them to the navigation controller while it is bound.
//!
//! # Example
//!
//! ```ignore
//! scene.dispatch(
//!     &mut controller,
//!     &SceneEvent::Wheel { delta: 1.0 },
//! );
//! ```

use glam::Vec2;

/// Scene input event delivered to bound observers.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// Pointer button pressed at a screen position.
    PointerDown {
        /// Cursor position in physical pixels, top-left origin.
        pixel: Vec2,
        /// Which button went down.
        button: PointerButton,
        /// Modifier keys held at press time.
        modifiers: Modifiers,
    },
    /// Pointer moved, possibly mid-drag.
    PointerMove {
        /// Cursor position in physical pixels, top-left origin.
        pixel: Vec2,
        /// Per-axis movement since the previous move event, in pixels.
        delta: Vec2,
        /// `true` while a button is held (a drag is in progress).
        dragging: bool,
        /// The button driving the drag, if any.
        button: PointerButton,
        /// Modifier keys currently held.
        modifiers: Modifiers,
    },
    /// Scroll wheel; only the sign of `delta` is significant to zoom.
    Wheel {
        /// Signed scroll magnitude (positive = toward the scene).
        delta: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key string in `winit::keyboard::KeyCode` debug
        /// format (`"KeyW"`, `"ShiftLeft"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Fired once per rendered frame, no payload.
    FrameUpdate,
}

impl SceneEvent {
    /// The subscription kind this event routes through.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::Wheel { .. } => EventKind::Wheel,
            Self::Key { pressed: true, .. } => EventKind::KeyDown,
            Self::Key { pressed: false, .. } => EventKind::KeyUp,
            Self::FrameUpdate => EventKind::FrameUpdate,
        }
    }
}

/// Subscription key for observer registration — one per event stream an
/// observer can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer button press events.
    PointerDown,
    /// Pointer motion events.
    PointerMove,
    /// Scroll wheel events.
    Wheel,
    /// Key press events.
    KeyDown,
    /// Key release events.
    KeyUp,
    /// Per-frame update ticks.
    FrameUpdate,
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary (left) button.
    #[default]
    Primary,
    /// Auxiliary (middle / wheel) button.
    Auxiliary,
    /// Secondary (right) button.
    Secondary,
}

/// Modifier key state carried on pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Whether a ctrl key is held.
    pub ctrl: bool,
    /// Whether a shift key is held.
    pub shift: bool,
}
