//! Fixed perspective camera and the world extent it sees at the origin.

use glam::{Mat4, Vec2, Vec3};

use crate::params::CameraParams;

/// Camera system for the backdrop (stationary, aimed at the origin)
pub struct CameraRig {
    params: CameraParams,
}

impl CameraRig {
    pub fn new(params: CameraParams) -> Self {
        Self { params }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.params.position)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Arguments
    /// * `aspect` - Drawable width / height
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let eye = self.eye();
        // Aimed at the field centre so screen centre maps to world origin
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(
            self.params.fov_degrees.to_radians(),
            aspect,
            self.params.near_plane,
            self.params.far_plane,
        );
        proj * view
    }

    /// World-space width/height visible at the camera's distance from the
    /// origin, used to map the pointer onto the field plane
    pub fn view_extent(&self, aspect: f32) -> Vec2 {
        let distance = self.eye().length();
        let height = 2.0 * (self.params.fov_degrees.to_radians() / 2.0).tan() * distance;
        Vec2::new(height * aspect, height)
    }

    /// Clip-space scale for a quad of `size` world units at unit depth
    pub fn point_scale(&self, size: f32, aspect: f32) -> Vec2 {
        let focal = 1.0 / (self.params.fov_degrees.to_radians() / 2.0).tan();
        Vec2::new(size * focal / aspect, size * focal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_extent_at_origin() {
        let camera = CameraRig::new(CameraParams::default());
        let extent = camera.view_extent(2.0);

        // |(0, 4, 8)| = sqrt(80), tan(30 deg) = 1/sqrt(3)
        let expected_height = 2.0 * 80f32.sqrt() / 3f32.sqrt();
        assert!((extent.y - expected_height).abs() < 1e-4);
        assert!((extent.x - expected_height * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraRig::new(CameraParams::default());
        let view_proj = camera.view_proj(16.0 / 9.0);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert!(view_proj.is_finite());

        // The field centre projects to the screen centre
        let origin = view_proj.project_point3(Vec3::ZERO);
        assert!(origin.x.abs() < 1e-5);
        assert!(origin.y.abs() < 1e-5);
        assert!(origin.z > 0.0 && origin.z < 1.0);
    }

    #[test]
    fn test_default_grid_rows_are_on_screen() {
        let camera = CameraRig::new(CameraParams::default());
        let view_proj = camera.view_proj(16.0 / 9.0);

        // Default 50x50 grid at spacing 0.2 spans -5.0..=4.8 on both axes
        for (x, z) in [(-5.0, -5.0), (4.8, -5.0), (-5.0, 4.8), (4.8, 4.8)] {
            let ndc = view_proj.project_point3(Vec3::new(x, 0.0, z));
            assert!(ndc.y.abs() <= 1.0, "row z={} off screen", z);
            assert!(ndc.z > 0.0 && ndc.z < 1.0);
        }

        // Far corners and the whole centre column fit entirely
        for (x, z) in [(-5.0, -5.0), (4.8, -5.0), (0.0, -5.0), (0.0, 4.8)] {
            let ndc = view_proj.project_point3(Vec3::new(x, 0.0, z));
            assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
        }
    }

    #[test]
    fn test_point_scale_shrinks_horizontally_with_aspect() {
        let camera = CameraRig::new(CameraParams::default());
        let scale = camera.point_scale(0.1, 2.0);
        assert!((scale.x * 2.0 - scale.y).abs() < 1e-6);
        assert!((scale.y - 0.1 * 3f32.sqrt()).abs() < 1e-5);
    }
}
