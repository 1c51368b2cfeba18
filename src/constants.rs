//! Application-wide constants.
//!
//! Centralizes default sizes, positions and limits used by the editor so the
//! add/upload/export paths agree on the same numbers.

// ============================================================================
// Item Defaults
// ============================================================================

/// Default size of an uploaded image item
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (300.0, 200.0);

/// Origin of the first uploaded image; later images are staggered from here
pub const IMAGE_ORIGIN: (f32, f32) = (50.0, 50.0);

/// Offset applied per existing item so repeated image adds don't stack exactly
pub const IMAGE_STAGGER: f32 = 20.0;

/// Default text item position and size
pub const DEFAULT_TEXT_POSITION: (f32, f32) = (100.0, 100.0);
pub const DEFAULT_TEXT_SIZE: (f32, f32) = (200.0, 50.0);

/// Placeholder shown in a freshly added text item
pub const DEFAULT_TEXT: &str = "Double-click to edit";

/// Default note position and size
pub const DEFAULT_NOTE_POSITION: (f32, f32) = (150.0, 150.0);
pub const DEFAULT_NOTE_SIZE: (f32, f32) = (250.0, 150.0);

pub const DEFAULT_NOTE_TITLE: &str = "Note";
pub const DEFAULT_NOTE_BODY: &str = "Write your note here...";

/// Default color palette position and size
pub const DEFAULT_PALETTE_POSITION: (f32, f32) = (200.0, 200.0);
pub const DEFAULT_PALETTE_SIZE: (f32, f32) = (240.0, 160.0);

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Default text color (violet)
pub const DEFAULT_TEXT_COLOR: &str = "#6366f1";

/// Sticky note fill (amber-100)
pub const DEFAULT_NOTE_BACKGROUND: &str = "#fef3c7";

/// Sticky note accent border (amber-500)
pub const DEFAULT_NOTE_BORDER: &str = "#f59e0b";

/// Swatches of a freshly added palette
pub const DEFAULT_PALETTE_COLORS: [&str; 6] = [
    "#f8b4b4", "#fcd9bd", "#fdf6b2", "#bcf0da", "#c3ddfd", "#cabffd",
];

/// Placeholder fill for images that cannot be loaded at export time (slate-200)
pub const IMAGE_PLACEHOLDER_COLOR: &str = "#e2e8f0";

/// Card fill and outline of text and palette items
pub const CARD_BACKGROUND: &str = "#ffffff";
pub const CARD_BORDER: &str = "#e2e8f0";

/// Export background behind the surface
pub const DEFAULT_EXPORT_BACKGROUND: &str = "#ffffff";

// ============================================================================
// Text Style
// ============================================================================

/// Default font size for text items
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Font sizes offered by the toolbar
pub const FONT_SIZES: [u32; 5] = [14, 16, 18, 24, 32];

// ============================================================================
// Input Handling
// ============================================================================

/// Default grid size for snapping
pub const DEFAULT_GRID_SIZE: f32 = 10.0;

// ============================================================================
// Z-Ordering
// ============================================================================

/// Layer of the item currently being dragged
pub const Z_DRAGGING: u32 = 1000;

/// Layer of the selected (not dragging) item
pub const Z_SELECTED: u32 = 100;

/// Common base layer
pub const Z_BASE: u32 = 1;

// ============================================================================
// Board
// ============================================================================

/// Item ids stay below this bound, so they remain exact when a JSON host
/// reads them as doubles.
pub const MAX_ITEM_ID: u64 = (1 << 53) - 1;

// ============================================================================
// Upload & Export
// ============================================================================

/// Maximum accepted size per uploaded file (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Export resolution multiplier relative to the display size
pub const DEFAULT_EXPORT_SCALE: f32 = 2.0;

/// Largest accepted export resolution multiplier
pub const MAX_EXPORT_SCALE: f32 = 8.0;

/// Upper bound on pixels in one exported image (64 megapixels)
pub const MAX_EXPORT_PIXELS: u64 = 64 * 1024 * 1024;

/// File name stem used when a board has no title
pub const DEFAULT_EXPORT_NAME: &str = "mood-board";

/// Width of a note's accent border in display pixels
pub const NOTE_BORDER_WIDTH: f32 = 4.0;

/// Palette swatch layout in display pixels
pub const SWATCH_SIZE: f32 = 32.0;
pub const SWATCH_GAP: f32 = 8.0;
pub const SWATCH_PADDING: f32 = 16.0;
pub const SWATCH_COLUMNS: usize = 3;
