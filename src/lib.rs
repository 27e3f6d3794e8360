pub mod cursor;
pub mod gui;
pub mod hotkey;
pub mod logging;
pub mod settings;
pub mod zoom;
