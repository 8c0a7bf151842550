//! Winit window-event adapter.
//!
//! Binds a controller to a winit event stream: translates mouse, wheel,
//! touch, arrow-key, and resize events into [`InputEvent`]s and forwards
//! them. Touch contacts are tracked by finger id so the controller always
//! sees a consistent, contact-ordered snapshot. Winit has no native context
//! menu, so nothing needs suppressing on secondary-button drags.
//!
//! Constructing the adapter is the "attach" half of the event-source
//! contract; [`dispose`](crate::controls::OrbitController::dispose) on the
//! controller is the detach half (a disposed controller ignores everything
//! this adapter forwards).

use glam::Vec2;
use winit::event::{
    ElementState, KeyEvent, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{InputEvent, PanDirection, TouchSet};
use crate::camera::OrbitCamera;
use crate::controls::OrbitController;

/// Translates [`WindowEvent`]s into controller input.
#[derive(Debug, Default)]
pub struct WinitInputHandler {
    cursor: Vec2,
    /// Active touch contacts in contact order, keyed by finger id.
    touches: Vec<(u64, Vec2)>,
}

impl WinitInputHandler {
    /// Create an adapter with no tracked state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event. Returns `true` if the event was forwarded to
    /// the controller.
    pub fn handle_event(
        &mut self,
        controller: &mut OrbitController,
        camera: &mut OrbitCamera,
        event: &WindowEvent,
    ) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor =
                    Vec2::new(position.x as f32, position.y as f32);
                controller.handle_event(
                    camera,
                    InputEvent::PointerMoved { position: self.cursor },
                );
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = (*button).into();
                let event = if *state == ElementState::Pressed {
                    InputEvent::PointerPressed {
                        button,
                        position: self.cursor,
                    }
                } else {
                    InputEvent::PointerReleased { button }
                };
                controller.handle_event(camera, event);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * 0.01
                    }
                };
                // winit scroll-up is positive; DOM deltaY is the opposite
                controller.handle_event(
                    camera,
                    InputEvent::Wheel { delta_y: -scroll },
                );
                true
            }
            WindowEvent::Touch(touch) => {
                self.handle_touch(controller, camera, *touch);
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(controller, camera, event)
            }
            WindowEvent::Resized(size) => {
                controller.set_viewport_size(Vec2::new(
                    size.width as f32,
                    size.height as f32,
                ));
                false
            }
            _ => false,
        }
    }

    /// Positions of the active contacts, in contact order.
    fn touch_snapshot(&self) -> TouchSet {
        let points: Vec<Vec2> =
            self.touches.iter().map(|(_, pos)| *pos).collect();
        TouchSet::new(&points)
    }

    fn handle_touch(
        &mut self,
        controller: &mut OrbitController,
        camera: &mut OrbitCamera,
        touch: Touch,
    ) {
        let position =
            Vec2::new(touch.location.x as f32, touch.location.y as f32);

        match touch.phase {
            TouchPhase::Started => {
                if !self.touches.iter().any(|(id, _)| *id == touch.id) {
                    self.touches.push((touch.id, position));
                }
                let touches = self.touch_snapshot();
                controller
                    .handle_event(camera, InputEvent::TouchStart { touches });
            }
            TouchPhase::Moved => {
                if let Some(entry) = self
                    .touches
                    .iter_mut()
                    .find(|(id, _)| *id == touch.id)
                {
                    entry.1 = position;
                }
                let touches = self.touch_snapshot();
                controller
                    .handle_event(camera, InputEvent::TouchMove { touches });
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(id, _)| *id != touch.id);
                controller.handle_event(camera, InputEvent::TouchEnd);
            }
        }
    }

    fn handle_key(
        &self,
        controller: &mut OrbitController,
        camera: &mut OrbitCamera,
        event: &KeyEvent,
    ) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return false;
        };
        let direction = match code {
            KeyCode::ArrowUp => PanDirection::Up,
            KeyCode::ArrowDown => PanDirection::Down,
            KeyCode::ArrowLeft => PanDirection::Left,
            KeyCode::ArrowRight => PanDirection::Right,
            _ => return false,
        };
        controller.handle_event(camera, InputEvent::KeyPan { direction });
        true
    }
}
