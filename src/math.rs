/// Value-type transform helpers on top of glam.
/// Matrices compose right-to-left: `a * b` applies `b` first.
use glam::{Mat4, Vec3, Vec4Swizzles};

/// Position / rotation (radians, pitch=x yaw=y roll=z) / scale of an object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// translation * rotZ * rotY * rotX * scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_scale(self.scale)
    }
}

/// OpenGL-style perspective projection (NDC depth in [-1, 1]).
#[inline]
pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y_radians, aspect, near, far)
}

/// Transform a point and apply the perspective divide.
/// When w is exactly zero the divide is skipped.
#[inline]
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    let clip = *m * p.extend(1.0);
    if clip.w != 0.0 {
        clip.xyz() / clip.w
    } else {
        clip.xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn identity_is_default() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn transform_applies_scale_before_rotation_before_translation() {
        let t = Transform {
            position: Vec3::new(10.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
            scale: Vec3::splat(2.0),
        };
        // (1,0,0) -> scale (2,0,0) -> rotY 90deg (0,0,-2) -> translate (10,0,-2)
        let p = transform_point(&t.matrix(), Vec3::X);
        assert!(approx(p, Vec3::new(10.0, 0.0, -2.0)), "got {p:?}");
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let a = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let b = Mat4::from_rotation_z(FRAC_PI_2);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn perspective_maps_near_and_far_to_ndc_bounds() {
        let proj = perspective(70f32.to_radians(), 4.0 / 3.0, 0.1, 1000.0);
        let near = transform_point(&proj, Vec3::new(0.0, 0.0, -0.1));
        let far = transform_point(&proj, Vec3::new(0.0, 0.0, -1000.0));
        assert!((near.z + 1.0).abs() < 1e-4, "near z = {}", near.z);
        assert!((far.z - 1.0).abs() < 1e-4, "far z = {}", far.z);
    }

    #[test]
    fn points_behind_the_eye_land_outside_depth_range() {
        let proj = perspective(70f32.to_radians(), 1.0, 0.1, 1000.0);
        let behind = transform_point(&proj, Vec3::new(0.0, 0.0, 5.0));
        assert!(behind.z > 1.0);
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }
}
