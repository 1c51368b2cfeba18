//! Image upload: acceptance filter and the upload dialog's staging state.
//!
//! Both entry points (drag-and-drop onto the dialog and the file picker) run
//! the same filter: only `image/*` media types are kept, and a single
//! oversized image rejects the whole batch.

use crate::error::UploadError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Where a batch of files came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadSource {
    #[default]
    DragDrop,
    FilePicker,
}

/// One file handed over by the host, already turned into a local preview reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    /// Display name, usually the file name
    pub name: String,
    /// Declared media type, e.g. "image/png"
    pub media_type: String,
    pub size_bytes: u64,
    /// Session-scoped URL the surface can display
    pub url: String,
}

impl UploadFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        size_bytes: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size_bytes,
            url: url.into(),
        }
    }

    /// Build an upload entry for a local file, guessing the media type from its extension.
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let meta = std::fs::metadata(path).map_err(|e| UploadError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        let media_type = media_type_for(path).to_string();
        let url = format!("file://{}", path.display());

        Ok(Self::new(name, media_type, meta.len(), url))
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    /// Size formatted the way the dialog lists it.
    pub fn size_label(&self) -> String {
        format!("{:.1}MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Keep the images of a batch, rejecting the batch if any image is over `max_bytes`.
pub fn validate_batch(files: Vec<UploadFile>, max_bytes: u64) -> Result<Vec<UploadFile>, UploadError> {
    let total = files.len();
    let images: Vec<UploadFile> = files.into_iter().filter(UploadFile::is_image).collect();

    if images.is_empty() {
        warn!(total, "upload rejected: no image files");
        return Err(UploadError::NoImages);
    }

    if let Some(big) = images.iter().find(|f| f.size_bytes > max_bytes) {
        warn!(name = %big.name, size = big.size_bytes, max = max_bytes, "upload rejected: file too large");
        return Err(UploadError::TooLarge {
            name: big.name.clone(),
            size: big.size_bytes,
            max: max_bytes,
        });
    }

    if images.len() < total {
        debug!(dropped = total - images.len(), "non-image files dropped from batch");
    }
    Ok(images)
}

/// Staging area of the upload dialog: files picked or dropped, waiting for confirmation.
#[derive(Debug, Default)]
pub struct UploadDialog {
    open: bool,
    drag_active: bool,
    selected: Vec<UploadFile>,
}

impl UploadDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Drag enter/over highlight the drop zone; leave and drop clear it.
    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Replace the staged files. On error the previous selection is kept.
    pub fn select(
        &mut self,
        files: Vec<UploadFile>,
        source: UploadSource,
        max_bytes: u64,
    ) -> Result<usize, UploadError> {
        if source == UploadSource::DragDrop {
            self.drag_active = false;
        }
        let accepted = validate_batch(files, max_bytes)?;
        debug!(?source, count = accepted.len(), "files staged for upload");
        self.selected = accepted;
        Ok(self.selected.len())
    }

    pub fn selected(&self) -> &[UploadFile] {
        &self.selected
    }

    /// Hand the staged files over and close. `None` when nothing is staged.
    pub fn confirm(&mut self) -> Option<Vec<UploadFile>> {
        if self.selected.is_empty() {
            return None;
        }
        self.open = false;
        Some(std::mem::take(&mut self.selected))
    }

    /// Close without uploading.
    pub fn close(&mut self) {
        self.open = false;
        self.drag_active = false;
        self.selected.clear();
    }
}
