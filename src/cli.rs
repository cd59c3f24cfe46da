//! Command-line argument parsing.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::params::{RecordingConfig, RenderConfig, UpstreamConfig, WaveParams, API_KEY_ENV};

/// Backdrop viewer arguments
#[derive(Parser, Debug)]
#[command(name = "Wavefolio")]
#[command(about = "Mouse-reactive particle wave backdrop", long_about = None)]
pub struct ViewerArgs {
    /// Record frames to PNG (duration in seconds), then exit
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Directory for recorded frames
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output_dir: String,

    /// Recording frame rate
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: u32,

    /// Number of points in the wave grid
    #[arg(long, value_name = "N", default_value = "2500")]
    pub points: usize,

    /// Window width (pixels)
    #[arg(long, value_name = "PX", default_value = "1280")]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, value_name = "PX", default_value = "720")]
    pub height: u32,
}

impl ViewerArgs {
    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            point_count: self.points,
            ..WaveParams::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width.max(1),
            window_height: self.height.max(1),
            ..RenderConfig::default()
        }
    }

    /// Recording configuration if recording mode is enabled
    ///
    /// Creates the output directories.
    pub fn create_recording_config(&self) -> std::io::Result<Option<RecordingConfig>> {
        let Some(duration) = self.record else {
            return Ok(None);
        };

        let config = RecordingConfig::new(duration, self.output_dir.clone(), self.fps);
        std::fs::create_dir_all(config.frames_dir())?;
        Ok(Some(config))
    }
}

/// Chat proxy arguments
#[derive(Parser, Debug)]
#[command(name = "chat_proxy")]
#[command(about = "Relays portfolio chat messages to a completion API", long_about = None)]
pub struct ProxyArgs {
    /// Listen address
    #[arg(long, env = "CHAT_PROXY_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Chat-completion endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Model identifier
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Completion length cap (tokens)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Replace the built-in assistant context with this file's text
    #[arg(long, value_name = "PATH")]
    pub context_file: Option<PathBuf>,

    /// Upstream bearer credential
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
}

impl ProxyArgs {
    /// Defaults with command-line overrides applied
    pub fn upstream_config(&self) -> UpstreamConfig {
        let defaults = UpstreamConfig::default();
        UpstreamConfig {
            endpoint: self.endpoint.clone().unwrap_or(defaults.endpoint),
            model: self.model.clone().unwrap_or(defaults.model),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            timeout_secs: defaults.timeout_secs,
        }
    }
}
