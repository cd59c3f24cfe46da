//! Pointer state and per-frame input handed to the field.
//!
//! The host owns a [`PointerTracker`] and writes it from cursor events. At the
//! start of each frame it copies a [`PointerSnapshot`] into a [`FrameInput`], so
//! the tick never observes a half-written coordinate.

use glam::Vec2;

/// Last known cursor position in window pixels, owned by the host loop
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move (pixels from the top-left corner)
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Cursor left the window
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Copy taken once per frame
    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            screen: self.position,
        }
    }
}

/// Immutable per-frame copy of the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Window pixels, `None` when there is no pointer
    pub screen: Option<Vec2>,
}

impl PointerSnapshot {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            screen: Some(Vec2::new(x, y)),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Normalized device coordinates (+Y up), or `None` when the pointer is
    /// absent, non-finite, outside the viewport, or the viewport is degenerate
    pub fn to_ndc(&self, viewport_px: Vec2) -> Option<Vec2> {
        let p = self.screen?;
        if !p.is_finite() || !viewport_px.is_finite() {
            return None;
        }
        if viewport_px.x <= 0.0 || viewport_px.y <= 0.0 {
            return None;
        }
        if p.x < 0.0 || p.y < 0.0 || p.x > viewport_px.x || p.y > viewport_px.y {
            return None;
        }

        Some(Vec2::new(
            (p.x / viewport_px.x) * 2.0 - 1.0,
            -(p.y / viewport_px.y) * 2.0 + 1.0,
        ))
    }

    /// Pointer mapped onto the field plane: x is world X, y is world Z
    pub fn to_world(&self, viewport_px: Vec2, view_extent: Vec2) -> Option<Vec2> {
        if !view_extent.is_finite() {
            return None;
        }
        self.to_ndc(viewport_px).map(|ndc| ndc * view_extent / 2.0)
    }
}

/// Everything one tick reads
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Seconds since the field was mounted
    pub elapsed_s: f32,

    pub pointer: PointerSnapshot,

    /// Drawable size in pixels (same space as the pointer)
    pub viewport_px: Vec2,

    /// World-space width/height visible at the origin plane
    pub view_extent: Vec2,
}

impl FrameInput {
    /// Frame with no pointer over the window
    pub fn at_time(elapsed_s: f32) -> Self {
        Self {
            elapsed_s,
            pointer: PointerSnapshot::none(),
            viewport_px: Vec2::ONE,
            view_extent: Vec2::ONE,
        }
    }

    pub fn pointer_world(&self) -> Option<Vec2> {
        self.pointer.to_world(self.viewport_px, self.view_extent)
    }
}
