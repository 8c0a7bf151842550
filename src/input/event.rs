//! Platform-agnostic input events.
//!
//! Hosts translate their windowing events into these and feed them to
//! [`OrbitController::handle_event`](crate::controls::OrbitController::handle_event)
//! in arrival order. Positions are absolute, in physical pixels.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input event consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer button pressed at an absolute position.
    PointerPressed {
        /// Which button went down.
        button: PointerButton,
        /// Cursor position at press time.
        position: Vec2,
    },
    /// Pointer moved to an absolute position.
    PointerMoved {
        /// New cursor position.
        position: Vec2,
    },
    /// Pointer button released.
    PointerReleased {
        /// Which button came up.
        button: PointerButton,
    },
    /// Wheel tick. Sign follows the DOM convention: negative `delta_y`
    /// scrolls away from the user and dollies the camera closer.
    Wheel {
        /// Vertical wheel delta.
        delta_y: f32,
    },
    /// Touch contact configuration changed (finger landed).
    TouchStart {
        /// Snapshot of the active contacts.
        touches: TouchSet,
    },
    /// Active touch contacts moved.
    TouchMove {
        /// Snapshot of the active contacts.
        touches: TouchSet,
    },
    /// A touch lifted, ending the gesture.
    TouchEnd,
    /// One-shot keyboard pan (arrow keys).
    KeyPan {
        /// Which way to pan.
        direction: PanDirection,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

/// Screen-space pan direction for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Pan the scene up.
    Up,
    /// Pan the scene down.
    Down,
    /// Pan the scene left.
    Left,
    /// Pan the scene right.
    Right,
}

/// Maximum touch points a gesture can use (three-finger pan).
const MAX_TRACKED_TOUCHES: usize = 3;

/// Snapshot of the active touch contacts, in contact order.
///
/// Stores at most the first three points (no gesture uses more) while
/// remembering the true contact count, so a four-finger mash is still
/// distinguishable from a three-finger pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSet {
    points: [Vec2; MAX_TRACKED_TOUCHES],
    stored: u8,
    count: u8,
}

impl TouchSet {
    /// Snapshot the given contacts. Counts above 255 saturate.
    #[must_use]
    pub fn new(contacts: &[Vec2]) -> Self {
        let mut points = [Vec2::ZERO; MAX_TRACKED_TOUCHES];
        let stored = contacts.len().min(MAX_TRACKED_TOUCHES);
        points[..stored].copy_from_slice(&contacts[..stored]);
        Self {
            points,
            stored: stored as u8,
            count: u8::try_from(contacts.len()).unwrap_or(u8::MAX),
        }
    }

    /// Number of active contacts (may exceed the stored three).
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count as usize
    }

    /// First contact position, if any.
    #[must_use]
    pub const fn primary(&self) -> Option<Vec2> {
        if self.stored >= 1 {
            Some(self.points[0])
        } else {
            None
        }
    }

    /// Pixel distance between the first two contacts (pinch separation).
    #[must_use]
    pub fn separation(&self) -> Option<f32> {
        if self.stored >= 2 {
            Some(self.points[0].distance(self.points[1]))
        } else {
            None
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_set_keeps_count_past_capacity() {
        let contacts = vec![Vec2::ZERO; 5];
        let set = TouchSet::new(&contacts);
        assert_eq!(set.count(), 5);
        assert!(set.primary().is_some());
    }

    #[test]
    fn separation_needs_two_contacts() {
        let one = TouchSet::new(&[Vec2::new(10.0, 10.0)]);
        assert_eq!(one.separation(), None);

        let two = TouchSet::new(&[Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(two.separation(), Some(5.0));
    }
}
