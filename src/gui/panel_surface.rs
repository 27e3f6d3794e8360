use std::sync::mpsc::Receiver;
use std::time::Instant;

use base64::{engine::general_purpose, Engine as _};
use eframe::egui;
use eframe::egui::epaint::Vertex;

use crate::zoom::controller::{ZoomController, TICK_INTERVAL};
use crate::zoom::panel::PanelEvent;
use crate::zoom::region::ScreenBounds;

/// Viewport flags for the panel surface: a screen-filling transparent layer,
/// always on top and fully transparent to input, standing in for the
/// declarative UI host of the panel strategy.
pub fn panel_viewport(bounds: ScreenBounds) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_position(egui::pos2(0.0, 0.0))
        .with_inner_size([bounds.width as f32, bounds.height as f32])
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_mouse_passthrough(true)
        .with_resizable(false)
        .with_taskbar(false)
        .with_active(false)
}

/// Declarative-style surface bound to the panel presenter's observables. It
/// consumes the change notifications, decodes the image payload and does its
/// own composition: the magnified view drawn inside a circle at the cursor
/// with a marker dot on top.
pub struct PanelSurfaceApp {
    controller: ZoomController,
    events: Receiver<PanelEvent>,
    mouse: (i32, i32),
    toggled: bool,
    zoom_texture: Option<egui::TextureHandle>,
    last_tick: Instant,
}

impl PanelSurfaceApp {
    pub fn new(controller: ZoomController, events: Receiver<PanelEvent>) -> Self {
        Self {
            controller,
            events,
            mouse: (-1, -1),
            toggled: false,
            zoom_texture: None,
            last_tick: Instant::now() - TICK_INTERVAL,
        }
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PanelEvent::MouseXChanged(x) => self.mouse.0 = x,
                PanelEvent::MouseYChanged(y) => self.mouse.1 = y,
                PanelEvent::ToggleStateChanged(on) => self.toggled = on,
                PanelEvent::ZoomImageChanged(payload) => {
                    match decode_payload(&payload) {
                        Ok(color_image) => match &mut self.zoom_texture {
                            Some(texture) => {
                                texture.set(color_image, egui::TextureOptions::LINEAR)
                            }
                            None => {
                                self.zoom_texture = Some(ctx.load_texture(
                                    "panel-zoom",
                                    color_image,
                                    egui::TextureOptions::LINEAR,
                                ));
                            }
                        },
                        Err(err) => tracing::warn!("discarding bad zoom payload: {err}"),
                    }
                }
            }
        }
    }
}

impl eframe::App for PanelSurfaceApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_tick.elapsed() >= TICK_INTERVAL {
            self.controller.tick();
            self.last_tick = Instant::now();
        }

        self.drain_events(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if !self.toggled {
                    return;
                }
                let Some(texture) = &self.zoom_texture else {
                    return;
                };

                let centre = egui::pos2(self.mouse.0 as f32, self.mouse.1 as f32);
                let radius = texture.size_vec2().x / 2.0;
                circular_image(ui.painter(), texture, centre, radius);
                ui.painter().circle_filled(
                    centre,
                    8.0,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 0, 120),
                );
            });

        ctx.request_repaint_after(TICK_INTERVAL);
    }
}

fn decode_payload(payload: &str) -> anyhow::Result<egui::ColorImage> {
    let png = general_purpose::STANDARD.decode(payload)?;
    let decoded = image::load_from_memory(&png)?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        decoded.as_raw(),
    ))
}

/// Draw `texture` clipped to a circle: a triangle fan whose UVs map the unit
/// circle onto the texture rectangle.
fn circular_image(
    painter: &egui::Painter,
    texture: &egui::TextureHandle,
    centre: egui::Pos2,
    radius: f32,
) {
    const SEGMENTS: usize = 48;

    let mut mesh = egui::Mesh::with_texture(texture.id());
    mesh.vertices.push(Vertex {
        pos: centre,
        uv: egui::pos2(0.5, 0.5),
        color: egui::Color32::WHITE,
    });
    for i in 0..=SEGMENTS {
        let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        mesh.vertices.push(Vertex {
            pos: egui::pos2(centre.x + cos * radius, centre.y + sin * radius),
            uv: egui::pos2(0.5 + cos * 0.5, 0.5 + sin * 0.5),
            color: egui::Color32::WHITE,
        });
    }
    for i in 1..=SEGMENTS as u32 {
        mesh.indices.extend_from_slice(&[0, i, i + 1]);
    }
    painter.add(egui::Shape::mesh(mesh));
}
