use anyhow::{anyhow, Context, Result};
use std::sync::mpsc::channel;
use std::sync::{Arc, Mutex};

use screen_loupe::gui::{overlay_viewport, panel_viewport, OverlayWindowApp, PanelSurfaceApp};
use screen_loupe::hotkey;
use screen_loupe::logging;
use screen_loupe::settings::{RenderMode, Settings};
use screen_loupe::zoom::controller::ZoomController;
use screen_loupe::zoom::floating::{FloatingPresenter, OverlayState};
use screen_loupe::zoom::panel::PanelPresenter;
use screen_loupe::zoom::sampler::DisplaySampler;

const SETTINGS_PATH: &str = "config.json";

fn main() -> Result<()> {
    let (settings, load_error) = match Settings::load(SETTINGS_PATH) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    logging::init(settings.debug_logging);
    if let Some(err) = load_error {
        tracing::warn!("settings unusable ({err}); continuing with defaults");
    }

    let binding = hotkey::parse_hotkey(&settings.hotkey).ok_or_else(|| {
        anyhow!(
            "cannot register hotkey '{}': unrecognised key combination",
            settings.hotkey
        )
    })?;
    let toggles = hotkey::spawn_listener(binding);
    tracing::info!("toggle bound to [{}]", settings.hotkey);

    let sampler = DisplaySampler::new().context("no display available for capture")?;
    let bounds = sampler.bounds();
    tracing::info!(
        width = bounds.width,
        height = bounds.height,
        mode = %settings.render_mode,
        "screen loupe starting"
    );

    let side = settings.magnified_side();

    match settings.render_mode {
        RenderMode::Floating => {
            let state = Arc::new(Mutex::new(OverlayState::default()));
            let presenter = FloatingPresenter::new(state.clone());
            let controller = ZoomController::new(
                &settings,
                bounds,
                toggles,
                Box::new(sampler),
                Box::new(presenter),
            );

            let native_options = eframe::NativeOptions {
                viewport: overlay_viewport(side),
                ..Default::default()
            };
            eframe::run_native(
                "screen_loupe",
                native_options,
                Box::new(move |_cc| Box::new(OverlayWindowApp::new(controller, state, side))),
            )
            .map_err(|err| anyhow!("failed to create overlay window: {err}"))?;
        }
        RenderMode::Panel => {
            let (events_tx, events_rx) = channel();
            let presenter = PanelPresenter::new(events_tx);
            let controller = ZoomController::new(
                &settings,
                bounds,
                toggles,
                Box::new(sampler),
                Box::new(presenter),
            );

            let native_options = eframe::NativeOptions {
                viewport: panel_viewport(bounds),
                ..Default::default()
            };
            eframe::run_native(
                "screen_loupe",
                native_options,
                Box::new(move |_cc| Box::new(PanelSurfaceApp::new(controller, events_rx))),
            )
            .map_err(|err| anyhow!("failed to load panel surface: {err}"))?;
        }
    }

    Ok(())
}
