//! Backdrop scene: the pointer-reactive wave plus the ambient cloud.

use super::ambient::AmbientLayer;
use super::wave::ParticleWave;
use crate::input::FrameInput;
use crate::params::{AmbientParams, WaveParams};

/// Both particle layers, ticked together by the host
pub struct ParticleScene {
    pub wave: ParticleWave,
    pub ambient: AmbientLayer,
}

impl ParticleScene {
    pub fn new(wave_params: &WaveParams, ambient_params: &AmbientParams) -> Self {
        Self {
            wave: ParticleWave::new(wave_params),
            ambient: AmbientLayer::new(ambient_params),
        }
    }

    /// One frame: recompute wave heights and advance both rotations
    ///
    /// Synchronous and allocation-free; safe to call from a redraw callback.
    pub fn tick(&mut self, frame: &FrameInput) {
        self.wave.update(frame);
        self.ambient.update(frame.elapsed_s);
    }
}
