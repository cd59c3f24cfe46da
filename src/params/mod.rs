//! Parameter definitions with units and documented semantics.
//!
//! All tuning numbers live here with:
//! - Units (world units, seconds, radians, pixels)
//! - Documented meanings
//! - `Default` impls holding the shipped values

mod camera;
mod chat;
mod render;
mod wave;

// Re-export all types
pub use camera::CameraParams;
pub use chat::{UpstreamConfig, API_KEY_ENV, DEFAULT_SYSTEM_CONTEXT};
pub use render::{hex_to_srgb, srgb_to_linear, LayerStyle, RecordingConfig, RenderConfig};
pub use wave::{AmbientParams, WaveParams};
