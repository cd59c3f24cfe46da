//! Ambient particle cloud: scattered once, then only rotated.

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::PointVertex;
use crate::params::AmbientParams;

/// Slowly tumbling depth filler around the wave field
pub struct AmbientLayer {
    positions: Vec<PointVertex>,
    params: AmbientParams,
    rotation: Vec3,
}

impl AmbientLayer {
    /// Scatter points uniformly inside the centred extent box
    pub fn new(params: &AmbientParams) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let half = Vec3::from_array(params.extent) / 2.0;

        let positions = (0..params.point_count)
            .map(|_| {
                let unit = Vec3::new(rng.gen(), rng.gen(), rng.gen());
                PointVertex {
                    position: ((unit * 2.0 - Vec3::ONE) * half).to_array(),
                }
            })
            .collect();

        Self {
            positions,
            params: params.clone(),
            rotation: Vec3::ZERO,
        }
    }

    /// Advance the cloud's orientation; points themselves never move
    pub fn update(&mut self, time_s: f32) {
        let p = &self.params;
        self.rotation.y = time_s * p.spin_rate;
        self.rotation.x = (time_s * p.tilt_frequency).sin() * p.tilt_amplitude;
    }

    pub fn positions(&self) -> &[PointVertex] {
        &self.positions
    }

    /// Euler rotation (radians), z unused
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Same XYZ Euler order as the scene graph the cloud was designed in
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x) * Mat4::from_rotation_y(self.rotation.y)
    }
}
