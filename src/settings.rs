use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the magnified view reaches the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Self-painted borderless window that follows the cursor.
    Floating,
    /// Publish frames and cursor coordinates to an external panel surface.
    Panel,
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::Floating
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Floating => write!(f, "floating"),
            RenderMode::Panel => write!(f, "panel"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Global key combination that toggles the loupe, e.g. "ctrl+shift+z".
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    /// Integer magnification applied to the sampled region.
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: u32,
    /// Side length in pixels of the square sampled around the cursor.
    #[serde(default = "default_area_size")]
    pub area_size: u32,
    #[serde(default)]
    pub render_mode: RenderMode,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_hotkey() -> String {
    "ctrl+shift+z".to_string()
}

fn default_zoom_factor() -> u32 {
    2
}

fn default_area_size() -> u32 {
    120
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkey: default_hotkey(),
            zoom_factor: default_zoom_factor(),
            area_size: default_area_size(),
            render_mode: RenderMode::default(),
            debug_logging: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting: {0}")]
    Invalid(&'static str),
}

impl Settings {
    /// Load settings from `path`. A missing file is not an error: the
    /// defaults are written out so the user has something to edit, then used
    /// as-is. Keys present in the file override defaults one by one.
    pub fn load(path: &str) -> Result<Self, SettingsError> {
        if !Path::new(path).exists() {
            let defaults = Self::default();
            match defaults.save(path) {
                Ok(()) => tracing::info!("wrote default settings to {path}"),
                Err(err) => tracing::warn!("could not write default settings to {path}: {err}"),
            }
            return Ok(defaults);
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.zoom_factor == 0 {
            return Err(SettingsError::Invalid("zoom_factor must be at least 1"));
        }
        if self.area_size == 0 {
            return Err(SettingsError::Invalid("area_size must be positive"));
        }
        Ok(())
    }

    /// Side length of the magnified output in pixels.
    pub fn magnified_side(&self) -> u32 {
        self.area_size * self.zoom_factor
    }
}
