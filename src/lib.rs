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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics allowances — casts are intentional and safe
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Float comparison: control math frequently compares against 0.0 and 1.0
#![allow(clippy::float_cmp)]
// Pedantic allowances
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

//! Orbit camera controller with spherical-coordinate constraints.
//!
//! Translates pointer, touch, wheel, and keyboard input into smooth camera
//! motion around a target point: rotation on a sphere, dolly along the view
//! ray (or zoom for orthographic projections), and screen-space panning,
//! with configurable angular/zoom/distance limits and optional inertial
//! damping.
//!
//! # Key entry points
//!
//! - [`controls::OrbitController`] - the controller state machine
//! - [`camera::OrbitCamera`] - the camera pose it drives
//! - [`config::ControlsConfig`] - validated tunables with TOML presets
//! - [`input::InputEvent`] - platform-agnostic input fed to the controller
//!
//! # Architecture
//!
//! The host owns the camera and the render loop. Input events are pushed
//! into the controller in arrival order via
//! [`handle_event`](controls::OrbitController::handle_event); they only
//! accumulate pending deltas and drive the gesture state machine. Once per
//! frame the host calls [`update`](controls::OrbitController::update), which
//! applies the accumulated deltas under the configured limits, mutates the
//! camera in place, and reports whether the pose changed beyond a small
//! threshold so static frames can skip re-rendering. Gesture notifications
//! are queued and drained with
//! [`take_events`](controls::OrbitController::take_events).

pub mod camera;
pub mod config;
pub mod controls;
pub mod error;
pub mod input;
