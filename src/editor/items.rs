//! Item management - add, upload and delete flows.

use super::BoardEditor;
use crate::constants::{
    DEFAULT_NOTE_BACKGROUND, DEFAULT_NOTE_BODY, DEFAULT_NOTE_BORDER, DEFAULT_NOTE_POSITION,
    DEFAULT_NOTE_TITLE, DEFAULT_PALETTE_COLORS, DEFAULT_PALETTE_POSITION, DEFAULT_TEXT,
    DEFAULT_TEXT_POSITION, IMAGE_ORIGIN, IMAGE_STAGGER,
};
use crate::error::{EditorError, EditorResult, UploadError};
use crate::geometry::Point;
use crate::input::DragEndReason;
use crate::notifications::Toast;
use crate::types::{BoardItem, ItemContent, ItemId};
use crate::upload::{UploadFile, UploadSource, validate_batch};
use tracing::{info, warn};

impl BoardEditor {
    // ==================== Add ====================

    /// Default position of the next image, offset by the number of items already placed.
    fn next_image_position(&self) -> Point {
        let k = self.board.item_count() as f32;
        Point::new(IMAGE_ORIGIN.0 + k * IMAGE_STAGGER, IMAGE_ORIGIN.1 + k * IMAGE_STAGGER)
    }

    pub fn add_image(&mut self, file: UploadFile) -> ItemId {
        let position = self.next_image_position();
        let content = ItemContent::Image {
            url: file.url,
            alt: file.name.clone(),
            original_name: file.name,
        };
        self.board.add_item(position, content)
    }

    /// Add already-validated files as image items, each staggered from the last.
    pub fn add_images(&mut self, files: Vec<UploadFile>) -> Vec<ItemId> {
        files.into_iter().map(|file| self.add_image(file)).collect()
    }

    pub fn add_text(&mut self) -> ItemId {
        let content = ItemContent::Text {
            text: DEFAULT_TEXT.to_string(),
            font_size: self.text_style.font_size,
            color: self.text_style.color.clone(),
            font_weight: self.text_style.font_weight,
        };
        let id = self.board.add_item(DEFAULT_TEXT_POSITION.into(), content);
        info!(item_id = id, "text added");
        id
    }

    pub fn add_note(&mut self) -> ItemId {
        let content = ItemContent::Note {
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: DEFAULT_NOTE_BODY.to_string(),
            background_color: DEFAULT_NOTE_BACKGROUND.to_string(),
            border_color: DEFAULT_NOTE_BORDER.to_string(),
        };
        let id = self.board.add_item(DEFAULT_NOTE_POSITION.into(), content);
        info!(item_id = id, "note added");
        id
    }

    pub fn add_color_palette(&mut self, title: Option<String>, colors: Vec<String>) -> ItemId {
        let colors = if colors.is_empty() {
            DEFAULT_PALETTE_COLORS.iter().map(|c| c.to_string()).collect()
        } else {
            colors
        };
        let id = self
            .board
            .add_item(DEFAULT_PALETTE_POSITION.into(), ItemContent::ColorPalette { title, colors });
        info!(item_id = id, "color palette added");
        id
    }

    // ==================== Upload ====================

    /// Validate a batch and add every accepted image. A rejected batch adds nothing
    /// and raises exactly one error notification.
    pub fn upload_images(
        &mut self,
        files: Vec<UploadFile>,
        source: UploadSource,
    ) -> Result<Vec<ItemId>, UploadError> {
        let accepted = match validate_batch(files, self.settings.max_upload_bytes) {
            Ok(accepted) => accepted,
            Err(e) => {
                self.notify_upload_error(&e);
                return Err(e);
            }
        };

        let ids = self.add_images(accepted);
        info!(?source, count = ids.len(), "images uploaded");
        self.toasts.push(
            Toast::success(format!("{} images added to your board.", ids.len()))
                .with_title("Images uploaded"),
        );
        Ok(ids)
    }

    /// Stage files in the upload dialog. Rejections are notified and leave the
    /// previous selection in place.
    pub fn stage_upload(&mut self, files: Vec<UploadFile>, source: UploadSource) -> Result<usize, UploadError> {
        let max = self.settings.max_upload_bytes;
        match self.upload_dialog.select(files, source, max) {
            Ok(n) => Ok(n),
            Err(e) => {
                self.notify_upload_error(&e);
                Err(e)
            }
        }
    }

    /// Upload whatever the dialog has staged and close it.
    pub fn confirm_upload(&mut self) -> Result<Vec<ItemId>, UploadError> {
        match self.upload_dialog.confirm() {
            Some(files) => self.upload_images(files, UploadSource::FilePicker),
            None => Ok(Vec::new()),
        }
    }

    fn notify_upload_error(&mut self, err: &UploadError) {
        let title = match err {
            UploadError::NoImages => "Invalid files",
            UploadError::TooLarge { .. } => "Files too large",
            UploadError::Unreadable { .. } => "Upload failed",
        };
        warn!(error = %err, "upload rejected");
        self.toasts.push(Toast::error(err.to_string()).with_title(title));
    }

    // ==================== Delete ====================

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: ItemId) -> EditorResult<()> {
        if self.board.get_item(id).is_none() {
            return Err(EditorError::ItemNotFound(id));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }

    /// Delete the item awaiting confirmation. Not undoable.
    pub fn confirm_delete(&mut self) -> EditorResult<BoardItem> {
        let id = self.pending_delete.take().ok_or(EditorError::NoPendingDelete)?;
        self.remove_item(id)
    }

    /// Delete with an inline confirmation prompt. Returns whether the item was removed.
    pub fn delete_item<F>(&mut self, id: ItemId, confirm: F) -> EditorResult<bool>
    where
        F: FnOnce(&BoardItem) -> bool,
    {
        let item = self.board.get_item(id).ok_or(EditorError::ItemNotFound(id))?;
        if !confirm(item) {
            return Ok(false);
        }
        self.remove_item(id)?;
        Ok(true)
    }

    fn remove_item(&mut self, id: ItemId) -> EditorResult<BoardItem> {
        if self.input_state.dragged_item_id() == Some(id) {
            self.input_state.end_drag(DragEndReason::ItemDeleted);
        }
        let item = self.board.remove_item(id).ok_or(EditorError::ItemNotFound(id))?;

        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.edit.as_ref().is_some_and(|edit| edit.item_id == id) {
            self.edit = None;
        }
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        info!(item_id = id, kind = item.kind().label(), name = %item.content.display_name(), "item deleted");
        Ok(item)
    }
}
