//! Editor settings, stored as JSON in the user's config directory.
//!
//! Every field has a default so partial or older files still load.

use crate::constants::{
    DEFAULT_EXPORT_BACKGROUND, DEFAULT_EXPORT_SCALE, DEFAULT_FONT_SIZE, DEFAULT_GRID_SIZE,
    DEFAULT_TEXT_COLOR, MAX_EXPORT_SCALE, MAX_UPLOAD_BYTES,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Grid used when snapping on release
    pub grid_size: f32,
    /// Snap the dragged item to the grid when the pointer is released
    pub snap_on_release: bool,
    /// Keep dragged items inside the surface once its size is known
    pub clamp_to_surface: bool,
    /// Per-file upload limit in bytes
    pub max_upload_bytes: u64,
    /// Export resolution multiplier
    pub export_scale: f32,
    pub export_background: String,
    pub default_text_color: String,
    pub default_font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snap_on_release: false,
            clamp_to_surface: true,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            export_scale: DEFAULT_EXPORT_SCALE,
            export_background: DEFAULT_EXPORT_BACKGROUND.to_string(),
            default_text_color: DEFAULT_TEXT_COLOR.to_string(),
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Settings {
    /// `<config_dir>/moodboard/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("moodboard").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            debug!("no config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Replace out-of-range values with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            warn!(grid_size = self.grid_size, "invalid grid size, using default");
            self.grid_size = defaults.grid_size;
        }
        if !(self.export_scale > 0.0 && self.export_scale <= MAX_EXPORT_SCALE) {
            warn!(export_scale = self.export_scale, "invalid export scale, using default");
            self.export_scale = defaults.export_scale;
        }
        self
    }
}
