//! Camera placement for the backdrop view.

/// Fixed perspective camera aimed at the world origin
#[derive(Debug, Clone)]
pub struct CameraParams {
    /// Eye position (world units)
    pub position: [f32; 3],

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            position: [0.0, 4.0, 8.0], // Above and in front of the grid
            fov_degrees: 60.0,
            near_plane: 0.1,
            far_plane: 100.0, // Ambient box diagonal is ~37
        }
    }
}
