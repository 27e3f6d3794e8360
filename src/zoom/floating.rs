use std::sync::{Arc, Mutex};

use anyhow::Result;
use image::RgbaImage;

use crate::zoom::composite::compose_overlay_frame;
use crate::zoom::magnify::MagnifiedFrame;
use crate::zoom::presenter::OverlayPresenter;
use crate::zoom::region::CursorPosition;

/// State shared between the render tick and the window that paints it.
#[derive(Debug, Default)]
pub struct OverlayState {
    pub visible: bool,
    pub cursor: (i32, i32),
    /// Composited frame waiting for upload; taken by the window each repaint.
    pub pending_frame: Option<RgbaImage>,
}

pub type SharedOverlayState = Arc<Mutex<OverlayState>>;

/// Pixel-level composition for the self-painted window. Vignette, lens hole
/// and centre marker are burned into the frame before hand-off, so the window
/// only uploads a texture and repositions itself.
pub struct FloatingPresenter {
    state: SharedOverlayState,
}

impl FloatingPresenter {
    pub fn new(state: SharedOverlayState) -> Self {
        Self { state }
    }
}

impl OverlayPresenter for FloatingPresenter {
    fn set_active(&mut self, active: bool) {
        self.state.lock().unwrap().visible = active;
    }

    fn cursor_moved(&mut self, cursor: CursorPosition) {
        self.state.lock().unwrap().cursor = (cursor.x, cursor.y);
    }

    fn present(&mut self, frame: &MagnifiedFrame, cursor: CursorPosition) -> Result<()> {
        let composed = compose_overlay_frame(frame);
        let mut state = self.state.lock().unwrap();
        state.cursor = (cursor.x, cursor.y);
        state.pending_frame = Some(composed);
        Ok(())
    }
}
