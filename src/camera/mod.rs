//! Camera pose and projection capabilities.
//!
//! The controller mutates an [`OrbitCamera`] in place and dispatches its
//! dolly/pan math over the camera's [`Projection`] tag.

/// Core camera pose struct.
pub mod core;
/// Capability-tagged projection variants.
pub mod projection;

pub use self::core::OrbitCamera;
pub use projection::Projection;
