//! Fixed scene camera.
//!
//! Orbit-parameterized so placement reads naturally, but nothing drives it
//! interactively.

use glam::{Mat4, Vec3};

/// Perspective camera looking at a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// The scene camera: 40 units down +z, 42° vertical field of view.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 40.0,
            target: Vec3::ZERO,
            fov_y_degrees: 42.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// World to view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// View to clip transform (wgpu depth range `0..1`).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye() {
        let cam = Camera::new();
        let eye = cam.position();
        assert!((eye - Vec3::new(0.0, 0.0, 40.0)).length() < 1e-5);
    }

    #[test]
    fn test_view_depth_of_origin() {
        let cam = Camera::new();
        let view_pos = cam.view_matrix().transform_point3(Vec3::ZERO);
        // Right-handed view space looks down -z
        assert!((view_pos.z + 40.0).abs() < 1e-4);
    }
}
