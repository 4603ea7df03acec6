//! Input handling: platform-agnostic event types, key actions, and the
//! transient state the navigation controller tracks across events.

/// Platform-agnostic scene events and subscription kinds.
pub mod event;
/// Key-bindable navigation actions.
pub mod keyboard;
/// Movement intent and drag bookkeeping.
pub mod state;
/// winit event translation (feature `viewer`).
#[cfg(feature = "viewer")]
pub mod winit;

pub use event::{EventKind, Modifiers, PointerButton, SceneEvent};
pub use keyboard::NavAction;
pub use state::{DragState, MoveIntent};
#[cfg(feature = "viewer")]
pub use winit::WindowAdapter;
