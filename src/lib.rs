// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive camera navigation for real-time 3D scenes.
//!
//! Scenenav turns pointer, wheel, keyboard, and per-frame events into
//! camera motion in one of three modes: orbiting a pivot, first-person
//! free-look with continuous movement, and ground-plane-locked dragging.
//!
//! # Key entry points
//!
//! - [`navigation::NavigationController`] - the event-driven controller
//! - [`scene::Scene`] - event routing, viewport, and the camera node
//! - [`camera::Camera`] - look-at camera with cached derived matrices
//! - [`options::Options`] - runtime configuration (TOML presets)
//!
//! # Architecture
//!
//! The controller is attached to a [`scene::Scene`], registering one
//! observer binding per event kind it handles; detaching releases
//! exactly those bindings. Handlers run synchronously: drags capture a
//! world-space anchor at pointer-down and each subsequent move applies
//! a delta through the active mode strategy, refreshing the camera's
//! cached matrices after every mutation. With the `viewer` feature the
//! `input::WindowAdapter` translates winit window events into the
//! platform-agnostic [`input::SceneEvent`] type.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod navigation;
pub mod options;
pub mod scene;

pub use camera::{Camera, Transform};
pub use error::NavError;
pub use input::{Modifiers, PointerButton, SceneEvent};
pub use navigation::{NavMode, NavigationController};
pub use options::Options;
pub use scene::{Scene, SceneNode};
