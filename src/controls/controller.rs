//! Orbit controller: gesture state machine, pending deltas, and the
//! per-frame pose update.

use std::f32::consts::PI;

use glam::{Quat, Vec2, Vec3};

use super::spherical::Spherical;
use super::state::InteractionState;
use crate::camera::{OrbitCamera, Projection};
use crate::config::ControlsConfig;
use crate::error::ControlsError;
use crate::input::{InputEvent, PanDirection, PointerButton, TouchSet};

/// Pose-change threshold: squared displacement, or the small-angle rotation
/// measure `8 * (1 - dot(q0, q1))`.
const EPS: f32 = 1e-6;

/// Notification queued toward the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A gesture began.
    Start,
    /// A gesture ended.
    End,
    /// The camera pose changed beyond the change threshold.
    Change,
}

/// Stateful orbit controller.
///
/// Converts input events into pending spherical deltas and applies them to
/// the camera in [`update`](Self::update), once per frame. The camera is
/// owned by the host and passed `&mut` into every call; between calls the
/// controller holds no reference to it.
///
/// # Usage
///
/// ```ignore
/// let mut controller = OrbitController::new(
///     &mut camera,
///     Vec3::ZERO,
///     ControlsConfig::default(),
///     Vec2::new(width, height),
/// )?;
///
/// // In the event loop:
/// controller.handle_event(&mut camera, event);
///
/// // Once per frame:
/// if controller.update(&mut camera) {
///     // re-render
/// }
/// for event in controller.take_events() { /* start/end/change */ }
/// ```
pub struct OrbitController {
    config: ControlsConfig,

    /// Orbit focus point.
    target: Vec3,
    /// Viewport size in physical pixels; drag angles are scaled by it.
    viewport: Vec2,

    state: InteractionState,

    // Pending deltas, consumed by `update`. The delta radius is unused;
    // dollying goes through `scale`.
    sphere_delta: Spherical,
    scale: f32,
    pan_offset: Vec3,
    zoom_changed: bool,

    /// Pose in spherical coordinates, refreshed by `update`.
    spherical: Spherical,

    // Basis rotation aligning the camera's up vector with world +Y, so the
    // spherical math never cares about the native up axis.
    quat: Quat,
    quat_inverse: Quat,

    // Change-detection baseline.
    last_position: Vec3,
    last_orientation: Quat,

    // Reset checkpoint.
    target0: Vec3,
    position0: Vec3,
    zoom0: Option<f32>,

    events: Vec<ControlEvent>,
    disposed: bool,
}

impl OrbitController {
    /// Bind a controller to `camera`, orbiting `target`.
    ///
    /// Validates `config`, captures the reset checkpoint, and runs one
    /// [`update`](Self::update) so the camera pose is consistent before the
    /// first render.
    ///
    /// # Errors
    ///
    /// Returns a [`ControlsError`] if any config limit invariant fails.
    pub fn new(
        camera: &mut OrbitCamera,
        target: Vec3,
        config: ControlsConfig,
        viewport: Vec2,
    ) -> Result<Self, ControlsError> {
        config.validate()?;

        let up = camera.up.try_normalize().unwrap_or(Vec3::Y);
        let quat = Quat::from_rotation_arc(up, Vec3::Y);

        let mut controller = Self {
            config,
            target,
            viewport,
            state: InteractionState::Idle,
            sphere_delta: Spherical::new(0.0, 0.0, 0.0),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            zoom_changed: false,
            spherical: Spherical::default(),
            quat,
            quat_inverse: quat.inverse(),
            last_position: Vec3::ZERO,
            last_orientation: Quat::IDENTITY,
            target0: target,
            position0: camera.position,
            zoom0: camera.projection.zoom(),
            events: Vec::new(),
            disposed: false,
        };

        let _ = controller.update(camera);
        log::debug!("orbit controls attached, target {target}");
        Ok(controller)
    }

    // ── Input ──

    /// Feed one input event.
    ///
    /// Events only accumulate pending deltas and drive the gesture state
    /// machine; the pose is recomputed by the next [`update`](Self::update)
    /// call. Ignored entirely while disabled or after
    /// [`dispose`](Self::dispose).
    pub fn handle_event(
        &mut self,
        camera: &mut OrbitCamera,
        event: InputEvent,
    ) {
        if self.disposed || !self.config.enabled {
            return;
        }
        match event {
            InputEvent::PointerPressed { button, position } => {
                self.on_pointer_pressed(button, position);
            }
            InputEvent::PointerMoved { position } => {
                self.on_pointer_moved(camera, position);
            }
            InputEvent::PointerReleased { .. } => self.on_pointer_released(),
            InputEvent::Wheel { delta_y } => self.on_wheel(camera, delta_y),
            InputEvent::TouchStart { touches } => self.on_touch_start(touches),
            InputEvent::TouchMove { touches } => {
                self.on_touch_move(camera, touches);
            }
            InputEvent::TouchEnd => self.on_touch_end(),
            InputEvent::KeyPan { direction } => {
                self.on_key_pan(camera, direction);
            }
        }
    }

    /// A press starts a gesture only from Idle; anything else would let a
    /// second button corrupt the anchor of the gesture in flight.
    fn on_pointer_pressed(&mut self, button: PointerButton, position: Vec2) {
        if !self.state.is_idle() {
            return;
        }
        let mouse = self.config.mouse;
        if button == mouse.rotate {
            if !self.config.enable_rotate {
                return;
            }
            self.state = InteractionState::Rotating { last: position };
        } else if button == mouse.dolly {
            if !self.config.enable_zoom {
                return;
            }
            self.state = InteractionState::Dollying { last: position };
        } else if button == mouse.pan {
            if !self.config.enable_pan {
                return;
            }
            self.state = InteractionState::Panning { last: position };
        } else {
            return;
        }
        self.events.push(ControlEvent::Start);
    }

    fn on_pointer_moved(&mut self, camera: &mut OrbitCamera, position: Vec2) {
        match self.state {
            InteractionState::Rotating { last } => {
                if !self.config.enable_rotate {
                    return;
                }
                self.rotate_from_drag(position - last);
                self.state = InteractionState::Rotating { last: position };
            }
            InteractionState::Dollying { last } => {
                if !self.config.enable_zoom {
                    return;
                }
                let delta_y = position.y - last.y;
                let scale = self.zoom_scale();
                if delta_y > 0.0 {
                    self.dolly_in(camera, scale);
                } else if delta_y < 0.0 {
                    self.dolly_out(camera, scale);
                }
                self.state = InteractionState::Dollying { last: position };
            }
            InteractionState::Panning { last } => {
                if !self.config.enable_pan {
                    return;
                }
                let delta = (position - last) * self.config.pan_speed;
                self.pan(camera, delta);
                self.state = InteractionState::Panning { last: position };
            }
            // Moves that don't match the active mode are ignored
            _ => {}
        }
    }

    fn on_pointer_released(&mut self) {
        if !self.state.is_pointer_gesture() {
            return;
        }
        self.state = InteractionState::Idle;
        self.events.push(ControlEvent::End);
    }

    /// Wheel is an atomic gesture: one tick dollies, then queues `Start`
    /// and `End` with no move between them, leaving the drag state alone.
    /// Accepted while idle or mid-rotate.
    fn on_wheel(&mut self, camera: &mut OrbitCamera, delta_y: f32) {
        if !self.config.enable_zoom {
            return;
        }
        if !matches!(
            self.state,
            InteractionState::Idle | InteractionState::Rotating { .. }
        ) {
            return;
        }
        let scale = self.zoom_scale();
        if delta_y < 0.0 {
            self.dolly_out(camera, scale);
        } else if delta_y > 0.0 {
            self.dolly_in(camera, scale);
        }
        self.events.push(ControlEvent::Start);
        self.events.push(ControlEvent::End);
    }

    /// Touch gestures are keyed by contact count: one finger rotates, two
    /// pinch-dolly, three pan. A new contact re-evaluates the gesture (that
    /// is how a rotate upgrades to a pinch); more than three drops to Idle.
    fn on_touch_start(&mut self, touches: TouchSet) {
        if self.state.is_pointer_gesture() {
            return;
        }
        match touches.count() {
            1 => {
                if !self.config.enable_rotate {
                    return;
                }
                let Some(position) = touches.primary() else {
                    return;
                };
                self.state =
                    InteractionState::TouchRotating { last: position };
            }
            2 => {
                if !self.config.enable_zoom {
                    return;
                }
                let Some(separation) = touches.separation() else {
                    return;
                };
                self.state = InteractionState::TouchDollying { separation };
            }
            3 => {
                if !self.config.enable_pan {
                    return;
                }
                let Some(position) = touches.primary() else {
                    return;
                };
                self.state =
                    InteractionState::TouchPanning { last: position };
            }
            _ => {
                self.state = InteractionState::Idle;
            }
        }
        if !self.state.is_idle() {
            self.events.push(ControlEvent::Start);
        }
    }

    fn on_touch_move(&mut self, camera: &mut OrbitCamera, touches: TouchSet) {
        match touches.count() {
            1 => {
                if !self.config.enable_rotate {
                    return;
                }
                let InteractionState::TouchRotating { last } = self.state
                else {
                    return;
                };
                let Some(position) = touches.primary() else {
                    return;
                };
                self.rotate_from_drag(position - last);
                self.state =
                    InteractionState::TouchRotating { last: position };
            }
            2 => {
                if !self.config.enable_zoom {
                    return;
                }
                let InteractionState::TouchDollying { separation } =
                    self.state
                else {
                    return;
                };
                let Some(current) = touches.separation() else {
                    return;
                };
                let delta = current - separation;
                let scale = self.zoom_scale();
                if delta > 0.0 {
                    self.dolly_out(camera, scale);
                } else if delta < 0.0 {
                    self.dolly_in(camera, scale);
                }
                self.state = InteractionState::TouchDollying {
                    separation: current,
                };
            }
            3 => {
                if !self.config.enable_pan {
                    return;
                }
                let InteractionState::TouchPanning { last } = self.state
                else {
                    return;
                };
                let Some(position) = touches.primary() else {
                    return;
                };
                let delta = (position - last) * self.config.pan_speed;
                self.pan(camera, delta);
                self.state =
                    InteractionState::TouchPanning { last: position };
            }
            _ => {
                self.state = InteractionState::Idle;
            }
        }
    }

    fn on_touch_end(&mut self) {
        if self.state.is_pointer_gesture() {
            return;
        }
        self.events.push(ControlEvent::End);
        self.state = InteractionState::Idle;
    }

    fn on_key_pan(&mut self, camera: &mut OrbitCamera, direction: PanDirection) {
        if !self.config.enable_keys || !self.config.enable_pan {
            return;
        }
        let step = self.config.key_pan_speed;
        let delta = match direction {
            PanDirection::Up => Vec2::new(0.0, step),
            PanDirection::Down => Vec2::new(0.0, -step),
            PanDirection::Left => Vec2::new(step, 0.0),
            PanDirection::Right => Vec2::new(-step, 0.0),
        };
        self.pan(camera, delta);
    }

    // ── Pending-delta accumulation ──

    /// Dragging across the whole viewport orbits a full turn horizontally
    /// and half a turn vertically.
    fn rotate_from_drag(&mut self, delta: Vec2) {
        let width = self.viewport.x.max(1.0);
        let height = self.viewport.y.max(1.0);
        self.rotate_left(
            2.0 * PI * delta.x / width * self.config.rotate_speed,
        );
        self.rotate_up(
            2.0 * PI * delta.y / height * self.config.rotate_speed,
        );
    }

    fn rotate_left(&mut self, angle: f32) {
        self.sphere_delta.theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        if self.config.reverse_orbit {
            self.sphere_delta.phi += angle;
        } else {
            self.sphere_delta.phi -= angle;
        }
    }

    /// Pixel pan converted to a world-space target offset along the camera's
    /// local axes; scaling branches on the projection so panning feels the
    /// same at any distance and viewport size.
    fn pan(&mut self, camera: &OrbitCamera, delta: Vec2) {
        let width = self.viewport.x.max(1.0);
        let height = self.viewport.y.max(1.0);
        match camera.projection {
            Projection::Perspective { fovy, .. } => {
                let mut target_distance =
                    (camera.position - self.target).length();
                // half of the fov spans screen center to top edge
                target_distance *= (fovy.to_radians() / 2.0).tan();
                self.pan_left(
                    2.0 * delta.x * target_distance / height,
                    camera,
                );
                self.pan_up(2.0 * delta.y * target_distance / height, camera);
            }
            Projection::Generic => {
                let target_distance =
                    (camera.position - self.target).length();
                self.pan_left(
                    2.0 * delta.x * target_distance / height,
                    camera,
                );
                self.pan_up(2.0 * delta.y * target_distance / height, camera);
            }
            Projection::Orthographic {
                zoom,
                left,
                right,
                top,
                bottom,
                ..
            } => {
                self.pan_left(
                    delta.x * (right - left) / zoom / width,
                    camera,
                );
                self.pan_up(
                    delta.y * (top - bottom) / zoom / height,
                    camera,
                );
            }
        }
    }

    fn pan_left(&mut self, distance: f32, camera: &OrbitCamera) {
        self.pan_offset += camera.right_axis() * -distance;
    }

    fn pan_up(&mut self, distance: f32, camera: &OrbitCamera) {
        self.pan_offset += camera.up_axis() * distance;
    }

    /// Perspective and generic objects dolly by scaling the orbit radius;
    /// orthographic cameras scale their zoom in place instead.
    fn dolly_in(&mut self, camera: &mut OrbitCamera, dolly_scale: f32) {
        match &mut camera.projection {
            Projection::Perspective { .. } | Projection::Generic => {
                self.scale /= dolly_scale;
            }
            Projection::Orthographic { zoom, .. } => {
                *zoom = (*zoom * dolly_scale)
                    .clamp(self.config.min_zoom, self.config.max_zoom);
                self.zoom_changed = true;
            }
        }
    }

    fn dolly_out(&mut self, camera: &mut OrbitCamera, dolly_scale: f32) {
        match &mut camera.projection {
            Projection::Perspective { .. } | Projection::Generic => {
                self.scale *= dolly_scale;
            }
            Projection::Orthographic { zoom, .. } => {
                *zoom = (*zoom / dolly_scale)
                    .clamp(self.config.min_zoom, self.config.max_zoom);
                self.zoom_changed = true;
            }
        }
    }

    fn zoom_scale(&self) -> f32 {
        0.95f32.powf(self.config.zoom_speed)
    }

    fn auto_rotation_angle(&self) -> f32 {
        // one turn per 30 seconds at 60 fps when the speed is 2.0
        2.0 * PI / 60.0 / 60.0 * self.config.auto_rotate_speed
    }

    // ── Per-frame update ──

    /// Apply the accumulated deltas to the camera and report whether the
    /// pose changed.
    ///
    /// Steps: refresh spherical coordinates from the current offset,
    /// auto-rotate while idle, add the pending angle deltas, clamp azimuth
    /// and polar limits, keep the polar angle off the poles, scale and clamp
    /// the radius, pan the target, rebuild the camera position, look at the
    /// target, then decay (damping) or zero the pending deltas.
    ///
    /// Returns `true` - and queues [`ControlEvent::Change`] - when the new
    /// pose differs from the previous one by more than the change threshold:
    /// squared displacement above epsilon, rotation above the small-angle
    /// measure, or a zoom change. Hosts use this to skip redundant renders.
    pub fn update(&mut self, camera: &mut OrbitCamera) -> bool {
        if self.disposed {
            return false;
        }

        // into the y-up orbit basis
        let offset = self.quat * (camera.position - self.target);
        self.spherical = Spherical::from_vec3(offset);

        if self.config.auto_rotate && self.state.is_idle() {
            self.rotate_left(self.auto_rotation_angle());
        }

        self.spherical.theta += self.sphere_delta.theta;
        self.spherical.phi += self.sphere_delta.phi;

        self.spherical.theta = self.spherical.theta.clamp(
            self.config.min_azimuth_angle,
            self.config.max_azimuth_angle,
        );
        self.spherical.phi = self
            .spherical
            .phi
            .clamp(self.config.min_polar_angle, self.config.max_polar_angle);
        self.spherical.make_safe();

        self.spherical.radius = (self.spherical.radius * self.scale)
            .clamp(self.config.min_distance, self.config.max_distance);

        self.target += self.pan_offset;

        // back out of the orbit basis
        let offset = self.quat_inverse * self.spherical.to_vec3();
        camera.position = self.target + offset;
        camera.look_at(self.target);

        if self.config.enable_damping {
            let keep = 1.0 - self.config.damping_factor;
            self.sphere_delta.theta *= keep;
            self.sphere_delta.phi *= keep;
        } else {
            self.sphere_delta = Spherical::new(0.0, 0.0, 0.0);
        }
        self.scale = 1.0;
        self.pan_offset = Vec3::ZERO;

        let moved =
            self.last_position.distance_squared(camera.position) > EPS;
        let turned = 8.0 * (1.0 - self.last_orientation.dot(camera.orientation))
            > EPS;
        if self.zoom_changed || moved || turned {
            self.events.push(ControlEvent::Change);
            self.last_position = camera.position;
            self.last_orientation = camera.orientation;
            self.zoom_changed = false;
            return true;
        }
        false
    }

    // ── Checkpointing and lifecycle ──

    /// Restore target, position, and zoom from the checkpoint captured at
    /// construction or the last [`save_state`](Self::save_state), queue an
    /// unconditional [`ControlEvent::Change`], and return to Idle.
    pub fn reset(&mut self, camera: &mut OrbitCamera) {
        if self.disposed {
            return;
        }
        self.target = self.target0;
        camera.position = self.position0;
        if let (Projection::Orthographic { zoom, .. }, Some(saved)) =
            (&mut camera.projection, self.zoom0)
        {
            *zoom = saved;
        }
        self.events.push(ControlEvent::Change);
        let _ = self.update(camera);
        self.state = InteractionState::Idle;
        log::debug!("orbit controls reset to checkpoint");
    }

    /// Overwrite the reset checkpoint with the current target, position,
    /// and (when the projection has one) zoom.
    pub fn save_state(&mut self, camera: &OrbitCamera) {
        self.target0 = self.target;
        self.position0 = camera.position;
        if let Some(zoom) = camera.projection.zoom() {
            self.zoom0 = Some(zoom);
        }
        log::debug!("orbit controls checkpoint saved");
    }

    /// Permanently detach the controller. Idempotent; afterwards no event
    /// or update mutates the camera.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.state = InteractionState::Idle;
        log::debug!("orbit controls disposed");
    }

    // ── Accessors ──

    /// Current polar angle in radians.
    #[must_use]
    pub const fn polar_angle(&self) -> f32 {
        self.spherical.phi
    }

    /// Current azimuthal angle in radians.
    #[must_use]
    pub const fn azimuthal_angle(&self) -> f32 {
        self.spherical.theta
    }

    /// Orbit focus point.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the orbit focus point; takes effect on the next update.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Active gesture state.
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.state
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &ControlsConfig {
        &self.config
    }

    /// Replace the configuration; rejects invalid limits.
    ///
    /// # Errors
    ///
    /// Returns a [`ControlsError`] if any config limit invariant fails; the
    /// previous configuration stays in effect.
    pub fn set_config(
        &mut self,
        config: ControlsConfig,
    ) -> Result<(), ControlsError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Toggle the master enable without rebuilding the config.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Update the viewport size used to scale drag gestures.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport = size;
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Drain the queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }
}
