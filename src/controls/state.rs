//! Gesture state machine.

use glam::Vec2;

/// Active interaction mode, with per-mode gesture anchors as payloads.
///
/// Anchors exist only while their mode is active; leaving the mode drops
/// them, so a stale anchor can never leak into the next gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    /// No gesture in progress.
    Idle,
    /// Rotate drag; anchor is the last cursor position.
    Rotating {
        /// Last cursor position of the drag.
        last: Vec2,
    },
    /// Dolly drag; anchor is the last cursor position.
    Dollying {
        /// Last cursor position of the drag.
        last: Vec2,
    },
    /// Pan drag; anchor is the last cursor position.
    Panning {
        /// Last cursor position of the drag.
        last: Vec2,
    },
    /// One-finger orbit.
    TouchRotating {
        /// Last primary-contact position.
        last: Vec2,
    },
    /// Two-finger pinch dolly.
    TouchDollying {
        /// Last pinch separation in pixels.
        separation: f32,
    },
    /// Three-finger pan.
    TouchPanning {
        /// Last primary-contact position.
        last: Vec2,
    },
}

impl InteractionState {
    /// Whether no gesture is active.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a mouse-drag gesture is active.
    #[must_use]
    pub const fn is_pointer_gesture(&self) -> bool {
        matches!(
            self,
            Self::Rotating { .. } | Self::Dollying { .. } | Self::Panning { .. }
        )
    }
}
