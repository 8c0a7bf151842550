//! Input handling: platform-agnostic event types and the optional winit
//! window-event adapter.

/// Platform-agnostic input events and touch snapshots.
pub mod event;
/// Winit window-event adapter (feature `winit`).
#[cfg(feature = "winit")]
pub mod winit;

pub use event::{InputEvent, PanDirection, PointerButton, TouchSet};
#[cfg(feature = "winit")]
pub use self::winit::WinitInputHandler;
