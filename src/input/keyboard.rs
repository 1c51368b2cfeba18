//! Keyboard handling - edit-modifier cursor hint and shortcuts.

use super::events::{InputOutcome, Key, KeyEvent};
use crate::editor::{BoardEditor, CursorMode};
use tracing::{debug, trace};

impl BoardEditor {
    pub fn handle_key_down(&mut self, event: KeyEvent) -> InputOutcome {
        match event.key {
            Key::Alt => self.update_cursor_mode(true),
            Key::Escape => self.handle_escape(),
            Key::Delete | Key::Backspace => {
                // Keys belong to the text input while editing
                if self.edit.is_some() {
                    return InputOutcome::Ignored;
                }
                let Some(id) = self.selected else {
                    return InputOutcome::Ignored;
                };
                match self.request_delete(id) {
                    Ok(()) => InputOutcome::DeleteRequested(id),
                    Err(_) => InputOutcome::Ignored,
                }
            }
            Key::Other(_) => InputOutcome::Ignored,
        }
    }

    pub fn handle_key_up(&mut self, event: KeyEvent) -> InputOutcome {
        match event.key {
            Key::Alt => self.update_cursor_mode(event.modifiers.is_edit()),
            _ => InputOutcome::Ignored,
        }
    }

    /// The cursor hint only changes while no drag is active.
    fn update_cursor_mode(&mut self, edit_held: bool) -> InputOutcome {
        if self.input_state.is_dragging() {
            return InputOutcome::Ignored;
        }
        let mode = if edit_held { CursorMode::Edit } else { CursorMode::Move };
        if mode == self.cursor_mode {
            return InputOutcome::Ignored;
        }
        self.cursor_mode = mode;
        trace!(hint = mode.hint(), "cursor mode changed");
        InputOutcome::CursorChanged(mode)
    }

    /// Escape unwinds one layer: drag, then edit, then delete prompt, then selection.
    fn handle_escape(&mut self) -> InputOutcome {
        if self.input_state.is_dragging() {
            return self.cancel_drag();
        }
        if let Some(item_id) = self.editing_item() {
            self.cancel_edit();
            return InputOutcome::EditCancelled(item_id);
        }
        if self.cancel_delete() {
            return InputOutcome::DeleteCancelled;
        }
        if self.selected.take().is_some() {
            debug!("selection cleared");
            return InputOutcome::SelectionCleared;
        }
        InputOutcome::Ignored
    }
}
