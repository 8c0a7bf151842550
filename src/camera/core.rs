use glam::{Mat3, Mat4, Quat, Vec3};

use crate::camera::projection::Projection;

/// Camera (or generic object) pose driven by the controller.
///
/// The controller holds no reference to this; the host owns it and passes it
/// `&mut` into every controller call. The camera looks down its local `-Z`
/// axis.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// World-space position.
    pub position: Vec3,
    /// Orientation; local `-Z` is the view direction.
    pub orientation: Quat,
    /// Up reference used as the orbit axis.
    pub up: Vec3,
    /// Projection capabilities.
    pub projection: Projection,
}

impl OrbitCamera {
    /// Camera at `position` with world-Y up, looking down `-Z`.
    #[must_use]
    pub const fn new(position: Vec3, projection: Projection) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            projection,
        }
    }

    /// Orient the camera so its `-Z` axis points at `target`, keeping the
    /// roll defined by [`up`](Self::up).
    ///
    /// Degenerate configurations (target at the eye, or view direction
    /// parallel to `up`) are nudged rather than producing NaNs.
    pub fn look_at(&mut self, target: Vec3) {
        let back = self.position - target;
        let mut z = if back.length_squared() > 0.0 {
            back.normalize()
        } else {
            Vec3::Z
        };

        let mut x = self.up.cross(z);
        if x.length_squared() < 1e-10 {
            // up is parallel to the view direction; nudge off the pole
            if self.up.z.abs() > 0.999_999 {
                z.x += 1e-4;
            } else {
                z.z += 1e-4;
            }
            z = z.normalize();
            x = self.up.cross(z);
        }
        x = x.normalize();
        let y = z.cross(x);

        self.orientation = Quat::from_mat3(&Mat3::from_cols(x, y, z));
    }

    /// Local right axis (column 0 of the camera matrix).
    #[must_use]
    pub fn right_axis(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Local up axis (column 1 of the camera matrix).
    #[must_use]
    pub fn up_axis(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// World-to-view matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Combined view-projection matrix, or `None` for
    /// [`Projection::Generic`].
    #[must_use]
    pub fn view_projection(&self) -> Option<Mat4> {
        self.projection.matrix().map(|proj| proj * self.view_matrix())
    }
}
