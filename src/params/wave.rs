//! Particle wave field tuning and ambient cloud layout.
//!
//! The values are aesthetic tuning carried over from the portfolio backdrop.
//! Distances are world units, rates are radians per second.

/// Grid field with an ambient surface wave and a pointer ripple
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Number of points (laid out on a round(sqrt(N)) wide grid)
    pub point_count: usize,

    /// Spacing between neighbouring grid points (world units)
    pub grid_spacing: f32,

    // === Ambient surface wave ===
    /// Height of each axis' travelling wave (total peak-to-peak is 4x this)
    pub wave_amplitude: f32,

    /// Spatial frequency along X (radians per world unit)
    pub wave_frequency_x: f32,

    /// Spatial frequency along Z (radians per world unit)
    pub wave_frequency_z: f32,

    /// Temporal rate of the X wave (radians per second)
    pub wave_speed_x: f32,

    /// Temporal rate of the Z wave (radians per second)
    pub wave_speed_z: f32,

    // === Pointer ripple ===
    /// Fraction of the pointer's world offset used as ripple centre
    /// (< 1 pulls the centre toward the origin)
    pub pointer_pull: f32,

    /// Distance beyond which the pointer has no influence (world units)
    pub falloff_radius: f32,

    /// Ripple spatial frequency (radians per world unit of distance)
    pub ripple_frequency: f32,

    /// Ripple outward speed (radians per second)
    pub ripple_speed: f32,

    /// Ripple height at full influence (world units)
    pub ripple_amplitude: f32,

    /// Spin of the whole field about +Y (radians per second)
    pub spin_rate: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            point_count: 2500, // 50 x 50 grid
            grid_spacing: 0.2,

            wave_amplitude: 0.1,
            wave_frequency_x: 2.0,
            wave_frequency_z: 2.0,
            wave_speed_x: 0.8,
            wave_speed_z: 0.6,

            pointer_pull: 0.8,
            falloff_radius: 3.0,
            ripple_frequency: 3.0,
            ripple_speed: 4.0,
            ripple_amplitude: 0.35,

            spin_rate: 0.025,
        }
    }
}

impl WaveParams {
    /// Grid side length for the configured point count
    pub fn grid_side(&self) -> usize {
        (self.point_count as f64).sqrt().round() as usize
    }
}

/// Randomly scattered depth-filler points, no pointer interaction
#[derive(Debug, Clone)]
pub struct AmbientParams {
    /// Number of scattered points
    pub point_count: usize,

    /// Full size of the centred scatter box (world units, X/Y/Z)
    pub extent: [f32; 3],

    /// Spin about +Y (radians per second)
    pub spin_rate: f32,

    /// Frequency of the X-axis tilt oscillation (radians per second)
    pub tilt_frequency: f32,

    /// Peak X-axis tilt (radians)
    pub tilt_amplitude: f32,

    /// Scatter RNG seed
    pub seed: u64,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            point_count: 600,
            extent: [25.0, 12.0, 25.0],
            spin_rate: 0.012,
            tilt_frequency: 0.06,
            tilt_amplitude: 0.06,
            seed: 42,
        }
    }
}
