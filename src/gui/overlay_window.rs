use std::time::Instant;

use eframe::egui;

use crate::zoom::controller::{ZoomController, TICK_INTERVAL};
use crate::zoom::floating::SharedOverlayState;

/// Viewport flags for the lens window: a borderless, transparent, topmost
/// square that never takes focus and lets every input event fall through to
/// whatever is underneath.
pub fn overlay_viewport(side: u32) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_inner_size([side as f32, side as f32])
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_mouse_passthrough(true)
        .with_resizable(false)
        .with_taskbar(false)
        .with_active(false)
        .with_visible(false)
}

/// Floating lens window. Runs the pipeline tick on the repaint schedule,
/// uploads whatever frame the presenter left behind and keeps itself centred
/// on the cursor.
pub struct OverlayWindowApp {
    controller: ZoomController,
    state: SharedOverlayState,
    side: u32,
    texture: Option<egui::TextureHandle>,
    last_tick: Instant,
    shown: bool,
}

impl OverlayWindowApp {
    pub fn new(controller: ZoomController, state: SharedOverlayState, side: u32) -> Self {
        Self {
            controller,
            state,
            side,
            texture: None,
            last_tick: Instant::now() - TICK_INTERVAL,
            shown: false,
        }
    }
}

impl eframe::App for OverlayWindowApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Fully transparent backdrop; only the lens frame is visible.
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_tick.elapsed() >= TICK_INTERVAL {
            self.controller.tick();
            self.last_tick = Instant::now();
        }

        let (visible, cursor, pending) = {
            let mut state = self.state.lock().unwrap();
            (state.visible, state.cursor, state.pending_frame.take())
        };

        if let Some(frame) = pending {
            let size = [frame.width() as usize, frame.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
            match &mut self.texture {
                Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture = Some(ctx.load_texture(
                        "lens-frame",
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ));
                }
            }
        }

        if visible != self.shown {
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(visible));
            self.shown = visible;
        }

        if visible {
            // Recentre on the cursor every tick.
            let half = self.side as f32 / 2.0;
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                cursor.0 as f32 - half,
                cursor.1 as f32 - half,
            )));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if visible {
                    if let Some(texture) = &self.texture {
                        ui.painter().image(
                            texture.id(),
                            ui.max_rect(),
                            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                            egui::Color32::WHITE,
                        );
                    }
                }
            });

        ctx.request_repaint_after(TICK_INTERVAL);
    }
}
