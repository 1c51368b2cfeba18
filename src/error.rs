//! Error types for editor operations
//!
//! One enum per concern. Every variant is terminal for the action that raised
//! it: nothing is partially applied.

use crate::types::{ItemId, ItemKind};
use thiserror::Error;

/// Errors raised by the item controller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditorError {
    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    /// Only text and note items expose an editable field
    #[error("Items of type {} cannot be edited", .0.label())]
    NotEditable(ItemKind),

    #[error("No item is being edited")]
    NoEditSession,

    #[error("No delete is awaiting confirmation")]
    NoPendingDelete,

    #[error("Font size {0}px is not offered (use 14, 16, 18, 24 or 32)")]
    UnsupportedFontSize(u32),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Input validation failures on upload.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    /// Nothing in the batch declared an `image/*` media type
    #[error("Please select only image files.")]
    NoImages,

    /// At least one image exceeds the limit; the whole batch is rejected
    #[error("{name} is {size} bytes (max {max} bytes). Please select images smaller than 10MB.")]
    TooLarge { name: String, size: u64, max: u64 },

    #[error("Could not read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Failures while exporting the board surface.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The host has not reported a laid-out surface yet
    #[error("Board surface not found")]
    SurfaceMissing,

    /// Scale times surface size exceeds the pixel budget
    #[error("Export of {width}x{height} pixels is too large")]
    TooLarge { width: u64, height: u64 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Platform denied clipboard access; not retried
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

/// A saved board that cannot be restored without breaking id uniqueness.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardStateError {
    #[error("Item id {0} appears more than once")]
    DuplicateItemId(ItemId),

    #[error("Item id {0} is outside the assignable range")]
    ItemIdOutOfRange(ItemId),
}

pub type EditorResult<T> = Result<T, EditorError>;

/// Dashboard board-list failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardIndexError {
    #[error("Board title cannot be empty")]
    EmptyTitle,

    #[error("Board {0} not found")]
    NotFound(String),
}
