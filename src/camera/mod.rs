//! Camera and node-pose primitives the navigation controller drives.
//!
//! The controller never owns these; it mutates them in place through the
//! scene node and refreshes derived matrices after every mutation.

/// Core camera struct with cached derived matrices.
pub mod core;
/// Rigid node pose (translation + rotation).
pub mod transform;

pub use self::core::Camera;
pub use transform::Transform;
