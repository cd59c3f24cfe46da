//! Animated particle field: a pointer-reactive grid wave and an ambient cloud.

mod ambient;
mod system;
mod wave;

use bytemuck::{Pod, Zeroable};

// Re-export public types
pub use ambient::AmbientLayer;
pub use system::ParticleScene;
pub use wave::{falloff, ParticleWave};

/// Per-point GPU instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
}
