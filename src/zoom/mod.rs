pub mod composite;
pub mod controller;
pub mod floating;
pub mod magnify;
pub mod panel;
pub mod presenter;
pub mod region;
pub mod sampler;

pub use controller::{ZoomController, TICK_INTERVAL};
pub use region::{CaptureRegion, CursorPosition, ScreenBounds};
