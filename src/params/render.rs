//! Rendering and recording configuration.

/// Appearance of one point layer
#[derive(Debug, Clone, Copy)]
pub struct LayerStyle {
    /// sRGB colour (0..1 per channel)
    pub color_srgb: [f32; 3],

    /// Alpha used for additive blending
    pub opacity: f32,

    /// Quad edge length (world units, shrinks with distance)
    pub point_size: f32,
}

impl LayerStyle {
    /// Build a style from a `0xRRGGBB` colour
    pub fn from_hex(hex: u32, opacity: f32, point_size: f32) -> Self {
        Self {
            color_srgb: hex_to_srgb(hex),
            opacity,
            point_size,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Background colour (sRGB)
    pub background_srgb: [f32; 3],

    /// Grid wave layer (cyan)
    pub wave_style: LayerStyle,

    /// Ambient cloud layer (violet)
    pub ambient_style: LayerStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            background_srgb: hex_to_srgb(0x020617),
            wave_style: LayerStyle::from_hex(0x22d3ee, 0.7, 0.03),
            ambient_style: LayerStyle::from_hex(0xa855f7, 0.35, 0.04),
        }
    }
}

/// Split `0xRRGGBB` into sRGB channels in 0..1
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// sRGB transfer function inverse, for feeding colours to an sRGB surface
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS), also the fixed simulation step
    pub fps: u32,
}

impl RecordingConfig {
    /// `fps` is clamped to at least 1
    pub fn new(duration_secs: f32, output_dir: impl Into<String>, fps: u32) -> Self {
        Self {
            duration_secs,
            output_dir: output_dir.into(),
            fps: fps.max(1),
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Seconds between captured frames
    pub fn frame_step_s(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }

    /// Path of a single captured frame
    pub fn frame_path(&self, frame_num: usize) -> String {
        format!("{}/frame_{:05}.png", self.frames_dir(), frame_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_srgb() {
        assert_eq!(hex_to_srgb(0xff0000), [1.0, 0.0, 0.0]);
        let cyan = hex_to_srgb(0x22d3ee);
        assert!((cyan[0] - 34.0 / 255.0).abs() < 1e-6);
        assert!((cyan[1] - 211.0 / 255.0).abs() < 1e-6);
        assert!((cyan[2] - 238.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        // Mid grey is darker in linear space
        assert!(srgb_to_linear(0.5) < 0.25);
    }

    #[test]
    fn test_recording_frame_count() {
        let config = RecordingConfig::new(2.5, "recording", 60);
        assert_eq!(config.total_frames(), 150);
        assert_eq!(config.frames_dir(), "recording/frames");

        let config = RecordingConfig::new(0.01, "out", 60);
        assert_eq!(config.total_frames(), 1);
        assert_eq!(config.frame_path(7), "out/frames/frame_00007.png");
    }

    #[test]
    fn test_recording_fps_never_zero() {
        let config = RecordingConfig::new(1.0, "out", 0);
        assert_eq!(config.fps, 1);
        assert_eq!(config.total_frames(), 1);
        assert_eq!(config.frame_step_s(), 1.0);
    }
}
