pub mod overlay_window;
pub mod panel_surface;

pub use overlay_window::{overlay_viewport, OverlayWindowApp};
pub use panel_surface::{panel_viewport, PanelSurfaceApp};
