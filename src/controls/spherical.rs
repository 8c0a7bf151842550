//! Spherical coordinates in orbit space.

use std::f32::consts::PI;

use glam::Vec3;

/// Margin kept between the polar angle and the poles.
const POLE_EPS: f32 = 1e-6;

/// Offset from the orbit target as (radius, polar, azimuth).
///
/// Defined in the y-up orbit basis: `phi` is the polar angle measured down
/// from the +Y pole, `theta` the azimuth around +Y measured from +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the target.
    pub radius: f32,
    /// Polar angle from the +Y pole, in radians.
    pub phi: f32,
    /// Azimuthal angle around +Y, in radians.
    pub theta: f32,
}

impl Default for Spherical {
    fn default() -> Self {
        Self {
            radius: 1.0,
            phi: 0.0,
            theta: 0.0,
        }
    }
}

impl Spherical {
    /// Build from explicit components.
    #[must_use]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a Cartesian offset into spherical coordinates.
    ///
    /// A zero vector yields zero angles (the azimuth is undefined there).
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            Self::new(0.0, 0.0, 0.0)
        } else {
            Self {
                radius,
                phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
                theta: v.x.atan2(v.z),
            }
        }
    }

    /// Convert back to a Cartesian offset.
    #[must_use]
    pub fn to_vec3(&self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Clamp `phi` a hair away from the poles so the subsequent look-at
    /// stays well defined.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_EPS, PI - POLE_EPS);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn round_trips_cartesian_offsets() {
        let offsets = [
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(3.0, 4.0, 5.0),
            Vec3::new(-2.0, 1.0, -7.0),
        ];
        for v in offsets {
            let back = Spherical::from_vec3(v).to_vec3();
            assert!((back - v).length() < 1e-4, "{v} -> {back}");
        }
    }

    #[test]
    fn equator_has_half_pi_polar_angle() {
        let s = Spherical::from_vec3(Vec3::new(0.0, 0.0, 5.0));
        assert!((s.phi - FRAC_PI_2).abs() < 1e-6);
        assert!(s.theta.abs() < 1e-6);
        assert!((s.radius - 5.0).abs() < 1e-6);
    }

    #[test]
    fn make_safe_keeps_phi_off_the_poles() {
        let mut north = Spherical::new(1.0, 0.0, 0.0);
        north.make_safe();
        assert!(north.phi > 0.0);

        let mut south = Spherical::new(1.0, PI, 0.0);
        south.make_safe();
        assert!(south.phi < PI);
    }

    #[test]
    fn zero_vector_is_degenerate_but_finite() {
        let s = Spherical::from_vec3(Vec3::ZERO);
        assert_eq!(s.radius, 0.0);
        assert_eq!(s.phi, 0.0);
        assert_eq!(s.theta, 0.0);
    }
}
