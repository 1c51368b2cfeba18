//! Input signals forwarded by the host.

use crate::editor::CursorMode;
use crate::geometry::Point;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// Keyboard modifier keys held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Alt / Option; the edit modifier
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    /// Held modifier that turns a press into edit entry instead of a drag.
    #[inline]
    pub fn is_edit(&self) -> bool {
        self.alt
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Which part of an item the press landed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressRegion {
    /// The item body (or the empty surface)
    #[default]
    Surface,
    /// A non-draggable control: action button, text input
    Control,
}

/// A pointer signal in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    pub region: PressRegion,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            region: PressRegion::Surface,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn on_control(mut self) -> Self {
        self.region = PressRegion::Control;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Alt,
    Escape,
    Delete,
    Backspace,
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Modifier state after the key change
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// What a handler did, so the host knows what to redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    SelectionCleared,
    DragStarted(ItemId),
    Moved { item_id: ItemId, position: Point },
    DragEnded(ItemId),
    EditStarted(ItemId),
    EditCancelled(ItemId),
    DeleteRequested(ItemId),
    DeleteCancelled,
    /// The cursor hint switched to this mode
    CursorChanged(CursorMode),
}
