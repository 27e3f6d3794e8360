use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::cursor;
use crate::hotkey::ToggleEvent;
use crate::settings::Settings;
use crate::zoom::magnify::magnify;
use crate::zoom::presenter::OverlayPresenter;
use crate::zoom::region::{compute_capture_region, CursorPosition, ScreenBounds};
use crate::zoom::sampler::ScreenSampler;

/// Interval between pipeline ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Owns the on/off toggle state and drives one sample -> magnify -> present
/// pass per scheduler tick. The tick runs on a single thread and never
/// overlaps with itself; the hotkey thread only talks to it through the
/// toggle channel.
pub struct ZoomController {
    area_size: u32,
    zoom_factor: u32,
    bounds: ScreenBounds,
    enabled: bool,
    last_cursor: Option<CursorPosition>,
    toggles: Receiver<ToggleEvent>,
    sampler: Box<dyn ScreenSampler>,
    presenter: Box<dyn OverlayPresenter>,
}

impl ZoomController {
    pub fn new(
        settings: &Settings,
        bounds: ScreenBounds,
        toggles: Receiver<ToggleEvent>,
        sampler: Box<dyn ScreenSampler>,
        presenter: Box<dyn OverlayPresenter>,
    ) -> Self {
        Self {
            area_size: settings.area_size,
            zoom_factor: settings.zoom_factor,
            bounds,
            enabled: false,
            last_cursor: None,
            toggles,
            sampler,
            presenter,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// One scheduler tick. Queued toggle events are applied first so flips
    /// land deterministically between pipeline runs, then the cursor is
    /// polled; the heavy capture work only happens while enabled.
    pub fn tick(&mut self) {
        while self.toggles.try_recv().is_ok() {
            self.toggle();
        }

        let Some(pos) = cursor::position() else {
            tracing::trace!("cursor position unavailable, skipping tick");
            return;
        };
        let cursor = CursorPosition::from(pos);

        // Nothing moved and the view is already live: the frame on screen is
        // still accurate.
        if self.enabled && self.last_cursor == Some(cursor) {
            return;
        }

        if self.last_cursor != Some(cursor) {
            self.presenter.cursor_moved(cursor);
            self.last_cursor = Some(cursor);
        }

        if !self.enabled {
            return;
        }

        let region = compute_capture_region(cursor, self.area_size, self.bounds);
        let frame = match self.sampler.sample(region) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::debug!("capture failed, skipping tick: {err}");
                return;
            }
        };

        let side = self.area_size * self.zoom_factor;
        let magnified = magnify(&frame, side, side);
        if let Err(err) = self.presenter.present(&magnified, cursor) {
            tracing::warn!("failed to present magnified frame: {err}");
        }
    }

    /// Edge-triggered flip, applied once per hotkey firing.
    fn toggle(&mut self) {
        self.enabled = !self.enabled;
        tracing::info!("zoom {}", if self.enabled { "on" } else { "off" });
        if self.enabled {
            // Force a fresh frame on the next tick even if the cursor has
            // not moved since the overlay was last visible.
            self.last_cursor = None;
        }
        self.presenter.set_active(self.enabled);
    }
}
