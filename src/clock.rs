//! Frame clock advanced once per rendered frame.

use std::time::Instant;

/// How elapsed time is produced
#[derive(Debug, Clone, Copy)]
pub enum ClockMode {
    /// Wall-clock seconds since the clock was created
    RealTime,

    /// Deterministic `frame * step_s` (recording)
    Fixed { step_s: f32 },
}

/// Monotonic elapsed-time source for the render loop
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    mode: ClockMode,
    frames: u64,
    elapsed_s: f32,
}

impl FrameClock {
    pub fn new(mode: ClockMode) -> Self {
        Self {
            start: Instant::now(),
            mode,
            frames: 0,
            elapsed_s: 0.0,
        }
    }

    /// Advance one frame and return the elapsed time for it
    pub fn tick(&mut self) -> f32 {
        let next = match self.mode {
            ClockMode::RealTime => self.start.elapsed().as_secs_f32(),
            ClockMode::Fixed { step_s } => self.frames as f32 * step_s,
        };
        // f32 rounding must not step backwards
        self.elapsed_s = next.max(self.elapsed_s);
        self.frames += 1;
        self.elapsed_s
    }

    /// Give back the last tick so the next one reuses its time. Used when a
    /// frame was never presented; a fixed clock must not skip ahead.
    pub fn repeat_frame(&mut self) {
        if let ClockMode::Fixed { step_s } = self.mode {
            self.frames = self.frames.saturating_sub(1);
            self.elapsed_s = self.frames.saturating_sub(1) as f32 * step_s;
        }
    }

    /// Frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_s
    }
}
