use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

use crate::zoom::magnify::MagnifiedFrame;
use crate::zoom::presenter::OverlayPresenter;
use crate::zoom::region::CursorPosition;

/// Property-change notifications consumed by the external panel surface.
/// Each event mirrors one observable binding and fires only when the
/// underlying value actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    MouseXChanged(i32),
    MouseYChanged(i32),
    /// Base64-encoded PNG of the latest magnified frame.
    ZoomImageChanged(String),
    ToggleStateChanged(bool),
}

/// Publishes the pipeline's observable state to a declarative panel surface.
/// Masking and the cursor marker are the surface's own drawing concern; this
/// side only encodes frames and reports coordinates.
pub struct PanelPresenter {
    events: Sender<PanelEvent>,
    mouse_x: i32,
    mouse_y: i32,
}

impl PanelPresenter {
    pub fn new(events: Sender<PanelEvent>) -> Self {
        Self {
            events,
            mouse_x: -1,
            mouse_y: -1,
        }
    }
}

impl OverlayPresenter for PanelPresenter {
    fn set_active(&mut self, active: bool) {
        let _ = self.events.send(PanelEvent::ToggleStateChanged(active));
    }

    fn cursor_moved(&mut self, cursor: CursorPosition) {
        // The two axes notify independently; only the one that moved fires.
        if cursor.x != self.mouse_x {
            self.mouse_x = cursor.x;
            let _ = self.events.send(PanelEvent::MouseXChanged(cursor.x));
        }
        if cursor.y != self.mouse_y {
            self.mouse_y = cursor.y;
            let _ = self.events.send(PanelEvent::MouseYChanged(cursor.y));
        }
    }

    fn present(&mut self, frame: &MagnifiedFrame, _cursor: CursorPosition) -> Result<()> {
        let payload = encode_frame(frame)?;
        self.events
            .send(PanelEvent::ZoomImageChanged(payload))
            .context("panel surface hung up")?;
        Ok(())
    }
}

/// PNG-compress and base64-wrap a frame for cross-process transfer.
pub fn encode_frame(frame: &MagnifiedFrame) -> Result<String> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            frame.image.as_raw(),
            frame.width(),
            frame.height(),
            ColorType::Rgb8,
        )
        .context("failed to encode magnified frame as PNG")?;
    Ok(general_purpose::STANDARD.encode(png))
}
