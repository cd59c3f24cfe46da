//! Wavefolio - the portfolio's particle wave backdrop in a desktop window
//!
//! A grid of points rolls with an ambient wave and ripples outward from the
//! cursor, over a slowly tumbling cloud of dust.

use std::sync::Arc;

use clap::Parser;
use glam::Vec2;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavefolio::camera::CameraRig;
use wavefolio::cli::ViewerArgs;
use wavefolio::clock::{ClockMode, FrameClock};
use wavefolio::field::ParticleScene;
use wavefolio::input::{FrameInput, PointerTracker};
use wavefolio::params::*;
use wavefolio::rendering::{LayerUniforms, RenderSystem};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    scene: ParticleScene,
    camera: CameraRig,
    pointer: PointerTracker,
    clock: FrameClock,

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    frame_num: usize,
}

impl App {
    fn new(
        wave_params: WaveParams,
        render_config: RenderConfig,
        recording_config: Option<RecordingConfig>,
    ) -> Self {
        let scene = ParticleScene::new(&wave_params, &AmbientParams::default());
        let camera = CameraRig::new(CameraParams::default());

        // Recording uses a fixed step so output does not depend on GPU speed
        let clock_mode = match &recording_config {
            Some(config) => ClockMode::Fixed {
                step_s: config.frame_step_s(),
            },
            None => ClockMode::RealTime,
        };

        Self {
            window: None,
            render_system: None,
            scene,
            camera,
            pointer: PointerTracker::new(),
            clock: FrameClock::new(clock_mode),
            render_config,
            recording_config,
            frame_num: 0,
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Wavefolio")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.scene,
            &self.render_config,
            self.recording_config.clone(),
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        info!("Wavefolio is running, press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.move_to(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.pointer.clear(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Tick the scene and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let (width, height) = render_system.size();
        let aspect = render_system.aspect_ratio();

        // Snapshot input once; the tick never sees later cursor events
        let frame = FrameInput {
            elapsed_s: self.clock.tick(),
            pointer: self.pointer.snapshot(),
            viewport_px: Vec2::new(width as f32, height as f32),
            view_extent: self.camera.view_extent(aspect),
        };
        self.scene.tick(&frame);

        render_system.sync_positions(&mut self.scene);

        let view_proj = self.camera.view_proj(aspect);
        let wave_style = &self.render_config.wave_style;
        let ambient_style = &self.render_config.ambient_style;
        let wave_uniforms = LayerUniforms::new(
            view_proj,
            self.scene.wave.model_matrix(),
            wave_style,
            self.camera.point_scale(wave_style.point_size, aspect),
        );
        let ambient_uniforms = LayerUniforms::new(
            view_proj,
            self.scene.ambient.model_matrix(),
            ambient_style,
            self.camera.point_scale(ambient_style.point_size, aspect),
        );
        render_system.update_uniforms(&wave_uniforms, &ambient_uniforms);

        match render_system.render(self.frame_num) {
            Ok(()) => self.frame_num += 1,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.resize(width, height);
                self.clock.repeat_frame();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => {
                warn!("Render error: {:?}", e);
                self.clock.repeat_frame();
            }
        }

        if let Some(config) = &self.recording_config {
            if self.frame_num >= config.total_frames() {
                info!(
                    "Recorded {} frames to {}",
                    self.frame_num,
                    config.frames_dir()
                );
                event_loop.exit();
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ViewerArgs::parse();
    let recording_config = args.create_recording_config()?;
    if let Some(config) = &recording_config {
        info!(
            "Recording {:.1}s at {} fps into {}",
            config.duration_secs,
            config.fps,
            config.frames_dir()
        );
    }

    let mut app = App::new(args.wave_params(), args.render_config(), recording_config);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
