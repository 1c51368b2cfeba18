//! Editor sub-state: edit session, toolbar text style, cursor hint.

use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR, FONT_SIZES};
use crate::error::{EditorError, EditorResult};
use crate::export::parse_hex_color;
use crate::settings::Settings;
use crate::types::{FontWeight, ItemId};

/// Pointer affordance shown over items. Presentation only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Move,
    Edit,
}

impl CursorMode {
    pub fn hint(&self) -> &'static str {
        match self {
            CursorMode::Move => "Drag to move",
            CursorMode::Edit => "Alt + click to edit",
        }
    }
}

/// Raw text buffer for the one item in edit mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub item_id: ItemId,
    pub buffer: String,
}

/// Style applied to newly added text items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub color: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_TEXT_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Normal,
        }
    }
}

impl TextStyle {
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        let mut style = Self::default();
        if style.set_color(&settings.default_text_color).is_err() {
            tracing::warn!(color = %settings.default_text_color, "invalid default text color in settings");
        }
        if style.set_font_size(settings.default_font_size).is_err() {
            tracing::warn!(size = settings.default_font_size, "unsupported default font size in settings");
        }
        style
    }

    pub fn set_color(&mut self, color: &str) -> EditorResult<()> {
        if parse_hex_color(color).is_none() {
            return Err(EditorError::InvalidColor(color.to_string()));
        }
        self.color = color.trim().to_lowercase();
        Ok(())
    }

    /// Only the sizes offered by the toolbar are accepted.
    pub fn set_font_size(&mut self, size: u32) -> EditorResult<()> {
        if !FONT_SIZES.contains(&size) {
            return Err(EditorError::UnsupportedFontSize(size));
        }
        self.font_size = size;
        Ok(())
    }
}
