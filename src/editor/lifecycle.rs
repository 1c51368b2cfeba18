//! Editor lifecycle - construction, surface layout, save placeholder.

use super::{BoardEditor, CursorMode, TextStyle};
use crate::board::{Board, BoardState};
use crate::geometry::{Point, Size};
use crate::input::InputState;
use crate::notifications::{Toast, ToastManager};
use crate::settings::Settings;
use crate::upload::UploadDialog;
use tracing::{debug, info};

impl BoardEditor {
    pub fn new(board: Board) -> Self {
        Self::with_settings(board, Settings::default())
    }

    pub fn with_settings(board: Board, settings: Settings) -> Self {
        let text_style = TextStyle::from_settings(&settings);
        Self {
            board,
            settings,
            surface_origin: Point::default(),
            surface_size: None,
            selected: None,
            input_state: InputState::default(),
            cursor_mode: CursorMode::default(),
            edit: None,
            pending_delete: None,
            text_style,
            toasts: ToastManager::new(),
            upload_dialog: UploadDialog::new(),
        }
    }

    /// Report where the surface sits on screen and how large it is.
    pub fn set_surface(&mut self, origin: Point, size: Size) {
        debug!(?origin, ?size, "surface laid out");
        self.surface_origin = origin;
        self.surface_size = Some(size);
    }

    /// The surface was unmounted; exports fail until it is laid out again.
    pub fn clear_surface(&mut self) {
        self.surface_size = None;
    }

    pub fn surface_size(&self) -> Option<Size> {
        self.surface_size
    }

    pub fn surface_origin(&self) -> Point {
        self.surface_origin
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn text_style_mut(&mut self) -> &mut TextStyle {
        &mut self.text_style
    }

    /// Placeholder: reports success and returns the current state without persisting it.
    pub fn save(&mut self) -> BoardState {
        info!(board_id = %self.board.id, items = self.board.item_count(), "board save requested (not persisted)");
        self.toasts.push(
            Toast::success("Your mood board has been saved successfully.").with_title("Board saved"),
        );
        self.board.snapshot()
    }
}
