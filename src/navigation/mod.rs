//! Camera navigation: the mode selector and the controller that turns
//! scene input events into camera deltas.

/// The event-driven navigation controller.
pub mod controller;
/// Navigation mode selector.
pub mod mode;

pub use controller::NavigationController;
pub use mode::NavMode;
