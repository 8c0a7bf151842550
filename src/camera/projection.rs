use glam::Mat4;

/// Capability tag for the orbited object's projection.
///
/// The controller dispatches on this tag instead of inspecting the camera at
/// runtime: perspective and generic objects dolly by moving along the view
/// ray, orthographic cameras dolly by scaling their zoom factor, and pan
/// distances are derived per variant so panning feels the same at any
/// resolution or distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective frustum.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
        /// Viewport aspect ratio (width / height).
        aspect: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// Orthographic box. `zoom` divides the visible extent about its center.
    Orthographic {
        /// Zoom factor; larger values show a smaller world-space extent.
        zoom: f32,
        /// Left frustum plane at zoom 1.
        left: f32,
        /// Right frustum plane at zoom 1.
        right: f32,
        /// Top frustum plane at zoom 1.
        top: f32,
        /// Bottom frustum plane at zoom 1.
        bottom: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// A plain orbited object with no projection of its own.
    Generic,
}

impl Projection {
    /// Perspective projection with library-default clipping planes.
    #[must_use]
    pub const fn perspective(fovy: f32, aspect: f32) -> Self {
        Self::Perspective {
            fovy,
            aspect,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Symmetric orthographic projection covering `width` x `height` world
    /// units at zoom 1.
    #[must_use]
    pub const fn orthographic(width: f32, height: f32) -> Self {
        Self::Orthographic {
            zoom: 1.0,
            left: -width / 2.0,
            right: width / 2.0,
            top: height / 2.0,
            bottom: -height / 2.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Current zoom factor, for projections that have one.
    #[must_use]
    pub const fn zoom(&self) -> Option<f32> {
        match self {
            Self::Orthographic { zoom, .. } => Some(*zoom),
            _ => None,
        }
    }

    /// Projection matrix ([0, 1] depth range, right-handed), or `None` for
    /// [`Projection::Generic`].
    ///
    /// Computed on demand, so zoom changes need no explicit recompute step.
    #[must_use]
    pub fn matrix(&self) -> Option<Mat4> {
        match *self {
            Self::Perspective {
                fovy,
                aspect,
                znear,
                zfar,
            } => Some(Mat4::perspective_rh(
                fovy.to_radians(),
                aspect,
                znear,
                zfar,
            )),
            Self::Orthographic {
                zoom,
                left,
                right,
                top,
                bottom,
                znear,
                zfar,
            } => {
                // Zoom shrinks the visible extent about its center
                let dx = (right - left) / (2.0 * zoom);
                let dy = (top - bottom) / (2.0 * zoom);
                let cx = (right + left) / 2.0;
                let cy = (top + bottom) / 2.0;
                Some(Mat4::orthographic_rh(
                    cx - dx,
                    cx + dx,
                    cy - dy,
                    cy + dy,
                    znear,
                    zfar,
                ))
            }
            Self::Generic => None,
        }
    }
}
