//! Core types for the mood-board surface.
//!
//! This module defines the items placed on a board and their per-kind
//! content payloads.

use crate::constants::{
    DEFAULT_IMAGE_SIZE, DEFAULT_NOTE_SIZE, DEFAULT_PALETTE_SIZE, DEFAULT_TEXT_SIZE,
};
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Identifier of an item, unique within one board.
pub type ItemId = u64;

/// An item placed on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique identifier for this item
    pub id: ItemId,
    /// Top-left corner in board-surface pixels
    pub position: Point,
    /// Fixed at creation
    pub size: Size,
    /// The content this item displays
    pub content: ItemContent,
}

impl BoardItem {
    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// Closed set of item kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Image,
    Text,
    Note,
    ColorPalette,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Image => "image",
            ItemKind::Text => "text",
            ItemKind::Note => "note",
            ItemKind::ColorPalette => "color-palette",
        }
    }
}

/// Font weight of a text item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// The content of an item, one payload shape per kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ItemContent {
    /// An uploaded image, referenced by a session-scoped preview URL
    #[serde(rename_all = "camelCase")]
    Image {
        url: String,
        alt: String,
        original_name: String,
    },
    /// A styled text block
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        /// Font size in pixels
        font_size: u32,
        /// Hex color, e.g. "#6366f1"
        color: String,
        font_weight: FontWeight,
    },
    /// A sticky note
    #[serde(rename_all = "camelCase")]
    Note {
        title: String,
        content: String,
        background_color: String,
        border_color: String,
    },
    /// An ordered set of color swatches
    #[serde(rename_all = "camelCase")]
    ColorPalette {
        title: Option<String>,
        colors: Vec<String>,
    },
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Image { .. } => ItemKind::Image,
            ItemContent::Text { .. } => ItemKind::Text,
            ItemContent::Note { .. } => ItemKind::Note,
            ItemContent::ColorPalette { .. } => ItemKind::ColorPalette,
        }
    }

    pub fn default_size(&self) -> Size {
        match self {
            ItemContent::Image { .. } => DEFAULT_IMAGE_SIZE.into(),
            ItemContent::Text { .. } => DEFAULT_TEXT_SIZE.into(),
            ItemContent::Note { .. } => DEFAULT_NOTE_SIZE.into(),
            ItemContent::ColorPalette { .. } => DEFAULT_PALETTE_SIZE.into(),
        }
    }

    /// The field exposed by edit mode: `text` for text items, `content` for notes.
    pub fn editable_text(&self) -> Option<&str> {
        match self {
            ItemContent::Text { text, .. } => Some(text),
            ItemContent::Note { content, .. } => Some(content),
            ItemContent::Image { .. } | ItemContent::ColorPalette { .. } => None,
        }
    }

    /// Replace the editable field. Returns false for kinds without one.
    pub fn set_editable_text(&mut self, value: String) -> bool {
        match self {
            ItemContent::Text { text, .. } => {
                *text = value;
                true
            }
            ItemContent::Note { content, .. } => {
                *content = value;
                true
            }
            ItemContent::Image { .. } | ItemContent::ColorPalette { .. } => false,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            ItemContent::Image { original_name, .. } => original_name.clone(),
            ItemContent::Text { text, .. } => text.clone(),
            ItemContent::Note { title, .. } => title.clone(),
            ItemContent::ColorPalette { title, .. } => {
                title.clone().unwrap_or_else(|| "Color Palette".to_string())
            }
        }
    }

    /// Case-insensitive match against the text a user would recognize the item by.
    pub fn matches(&self, needle_lower: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle_lower);
        match self {
            ItemContent::Image { alt, original_name, .. } => hit(alt) || hit(original_name),
            ItemContent::Text { text, .. } => hit(text),
            ItemContent::Note { title, content, .. } => hit(title) || hit(content),
            ItemContent::ColorPalette { title, colors } => {
                title.as_deref().is_some_and(hit) || colors.iter().any(|c| hit(c))
            }
        }
    }
}
