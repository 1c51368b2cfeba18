//! Edit mode for text and note items.
//!
//! At most one item is in edit mode. The buffer is detached from the item
//! until saved, so cancelling leaves the item untouched.

use super::{BoardEditor, EditSession};
use crate::error::{EditorError, EditorResult};
use crate::types::ItemId;
use tracing::{debug, info};

impl BoardEditor {
    /// Enter edit mode on `id`, replacing any previous session.
    pub fn begin_edit(&mut self, id: ItemId) -> EditorResult<()> {
        let item = self.board.get_item(id).ok_or(EditorError::ItemNotFound(id))?;
        let buffer = item
            .content
            .editable_text()
            .ok_or(EditorError::NotEditable(item.kind()))?
            .to_string();

        if let Some(previous) = self.edit.replace(EditSession { item_id: id, buffer }) {
            debug!(item_id = previous.item_id, "edit session replaced");
        }
        debug!(item_id = id, "edit started");
        Ok(())
    }

    pub fn editing_item(&self) -> Option<ItemId> {
        self.edit.as_ref().map(|edit| edit.item_id)
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit.as_ref().map(|edit| edit.buffer.as_str())
    }

    pub fn set_edit_buffer(&mut self, value: impl Into<String>) -> EditorResult<()> {
        let edit = self.edit.as_mut().ok_or(EditorError::NoEditSession)?;
        edit.buffer = value.into();
        Ok(())
    }

    /// Write the buffer back into the item and leave edit mode.
    pub fn save_edit(&mut self) -> EditorResult<ItemId> {
        let edit = self.edit.take().ok_or(EditorError::NoEditSession)?;
        let content = self
            .board
            .get_item_content_mut(edit.item_id)
            .ok_or(EditorError::ItemNotFound(edit.item_id))?;
        if !content.set_editable_text(edit.buffer) {
            return Err(EditorError::NotEditable(content.kind()));
        }
        info!(item_id = edit.item_id, "edit saved");
        Ok(edit.item_id)
    }

    /// Discard the buffer. Returns whether a session was active.
    pub fn cancel_edit(&mut self) -> bool {
        match self.edit.take() {
            Some(edit) => {
                debug!(item_id = edit.item_id, "edit cancelled");
                true
            }
            None => false,
        }
    }
}
