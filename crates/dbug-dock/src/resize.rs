//! Drawer resizing.
//!
//! Height follows the pointer: `viewport - pointer_y`, clamped to
//! `[MIN_HEIGHT, floor(viewport * MAX_VIEWPORT_SHARE)]`.

use crate::page::DockId;

pub const MIN_HEIGHT: f64 = 180.0;
pub const MAX_VIEWPORT_SHARE: f64 = 0.85;
/// Used when the host reports no viewport height.
pub const FALLBACK_VIEWPORT: f64 = 800.0;

/// Drag state. Move and up events only matter while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Dragging {
        dock: DockId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeEffect {
    /// Drag began; attach move/up listeners and open the dock.
    Start(DockId),
    Resize { dock: DockId, height: f64 },
    /// Drag ended; persist the height and detach listeners.
    Finish(DockId),
    Ignored,
}

impl ResizeState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ResizeState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, dock: DockId) -> ResizeEffect {
        *self = ResizeState::Dragging { dock };
        ResizeEffect::Start(dock)
    }

    pub fn pointer_move(&self, pointer_y: f64, viewport: f64) -> ResizeEffect {
        match *self {
            ResizeState::Idle => ResizeEffect::Ignored,
            ResizeState::Dragging { dock } => ResizeEffect::Resize {
                dock,
                height: clamp_height(viewport, pointer_y),
            },
        }
    }

    pub fn pointer_up(&mut self) -> ResizeEffect {
        match std::mem::take(self) {
            ResizeState::Idle => ResizeEffect::Ignored,
            ResizeState::Dragging { dock } => ResizeEffect::Finish(dock),
        }
    }
}

pub fn clamp_height(viewport: f64, pointer_y: f64) -> f64 {
    let viewport = if viewport > 0.0 {
        viewport
    } else {
        FALLBACK_VIEWPORT
    };
    let max = (viewport * MAX_VIEWPORT_SHARE).floor();
    (viewport - pointer_y).min(max).max(MIN_HEIGHT)
}

/// `412` -> `"412px"`, `412.5` -> `"412.5px"`.
pub fn css_px(height: f64) -> String {
    format!("{}px", height)
}
