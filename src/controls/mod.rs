//! Orbit controller: state machine, spherical math, and notifications.

/// The controller itself.
pub mod controller;
/// Spherical coordinate triple used by the orbit math.
pub mod spherical;
/// Gesture state machine.
pub mod state;

pub use controller::{ControlEvent, OrbitController};
pub use spherical::Spherical;
pub use state::InteractionState;
