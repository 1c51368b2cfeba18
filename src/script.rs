//! Input scripts - a JSON list of editor actions replayed against a fresh board.
//!
//! ```json
//! {
//!   "board": { "title": "Interior Ideas" },
//!   "steps": [
//!     { "action": "set_surface", "origin": { "x": 0, "y": 0 }, "size": { "width": 800, "height": 600 } },
//!     { "action": "add_note" },
//!     { "action": "pointer_down", "x": 160, "y": 160 },
//!     { "action": "pointer_move", "x": 300, "y": 200 },
//!     { "action": "pointer_up", "x": 300, "y": 200 }
//!   ]
//! }
//! ```
//!
//! A failing step is recorded and replay continues; failed actions leave the
//! editor unchanged.

use crate::board::Board;
use crate::editor::BoardEditor;
use crate::geometry::{Point, Size};
use crate::input::{InputOutcome, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, PressRegion};
use crate::settings::Settings;
use crate::types::{FontWeight, ItemId};
use crate::upload::{UploadFile, UploadSource};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScriptBoard {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for ScriptBoard {
    fn default() -> Self {
        Self {
            title: "Untitled Board".to_string(),
            description: None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub board: ScriptBoard,
    /// Overrides the settings file when present
    #[serde(default)]
    pub settings: Option<Settings>,
    pub steps: Vec<ScriptStep>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    SetSurface {
        origin: Point,
        size: Size,
    },
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        region: PressRegion,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp {
        x: f32,
        y: f32,
    },
    FocusLost,
    CaptureLost,
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyUp {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Select {
        id: Option<ItemId>,
    },
    AddText,
    AddNote,
    AddColorPalette {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        colors: Vec<String>,
    },
    UploadImages {
        files: Vec<UploadFile>,
        #[serde(default)]
        source: UploadSource,
    },
    /// Upload local files, resolving relative paths against the script's directory
    UploadPaths {
        paths: Vec<PathBuf>,
    },
    BeginEdit {
        id: ItemId,
    },
    SetEditBuffer {
        text: String,
    },
    SaveEdit,
    CancelEdit,
    RequestDelete {
        id: ItemId,
    },
    ConfirmDelete,
    CancelDelete,
    SetTextColor {
        color: String,
    },
    SetFontSize {
        size: u32,
    },
    SetFontWeight {
        weight: FontWeight,
    },
    Save,
}

/// A step that did not apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepFailure {
    pub index: usize,
    pub message: String,
}

pub struct Replay {
    pub editor: BoardEditor,
    pub outcomes: Vec<Option<InputOutcome>>,
    pub failures: Vec<StepFailure>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse input script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Replay every step against a new editor. `base_dir` resolves relative upload paths.
    pub fn run(&self, fallback_settings: Settings, base_dir: &Path) -> Replay {
        let mut board = Board::new(self.board.title.clone());
        board.description = self.board.description.clone();
        let settings = self.settings.clone().map(Settings::sanitized).unwrap_or(fallback_settings);
        let mut editor = BoardEditor::with_settings(board, settings);

        let mut outcomes = Vec::with_capacity(self.steps.len());
        let mut failures = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            match apply_step(&mut editor, step, base_dir) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!(index, error = %e, "script step failed");
                    outcomes.push(None);
                    failures.push(StepFailure {
                        index,
                        message: format!("{e:#}"),
                    });
                }
            }
        }
        Replay {
            editor,
            outcomes,
            failures,
        }
    }
}

/// Apply one step. Pointer and key steps report the handler outcome.
pub fn apply_step(editor: &mut BoardEditor, step: &ScriptStep, base_dir: &Path) -> Result<Option<InputOutcome>> {
    debug!(?step, "applying script step");
    let outcome = match step {
        ScriptStep::SetSurface { origin, size } => {
            editor.set_surface(*origin, *size);
            None
        }
        ScriptStep::PointerDown {
            x,
            y,
            button,
            modifiers,
            region,
        } => {
            let mut event = PointerEvent::at(*x, *y)
                .with_button(*button)
                .with_modifiers(*modifiers);
            event.region = *region;
            Some(editor.handle_pointer_down(event))
        }
        ScriptStep::PointerMove { x, y } => Some(editor.handle_pointer_move(PointerEvent::at(*x, *y))),
        ScriptStep::PointerUp { x, y } => Some(editor.handle_pointer_up(PointerEvent::at(*x, *y))),
        ScriptStep::FocusLost => Some(editor.handle_focus_lost()),
        ScriptStep::CaptureLost => Some(editor.handle_pointer_capture_lost()),
        ScriptStep::KeyDown { key, modifiers } => {
            Some(editor.handle_key_down(KeyEvent::new(key.clone(), *modifiers)))
        }
        ScriptStep::KeyUp { key, modifiers } => Some(editor.handle_key_up(KeyEvent::new(key.clone(), *modifiers))),
        ScriptStep::Select { id } => {
            editor.select(*id);
            None
        }
        ScriptStep::AddText => {
            editor.add_text();
            None
        }
        ScriptStep::AddNote => {
            editor.add_note();
            None
        }
        ScriptStep::AddColorPalette { title, colors } => {
            editor.add_color_palette(title.clone(), colors.clone());
            None
        }
        ScriptStep::UploadImages { files, source } => {
            editor.upload_images(files.clone(), *source)?;
            None
        }
        ScriptStep::UploadPaths { paths } => {
            let files = paths
                .iter()
                .map(|p| UploadFile::from_path(&base_dir.join(p)))
                .collect::<Result<Vec<_>, _>>()?;
            editor.upload_images(files, UploadSource::FilePicker)?;
            None
        }
        ScriptStep::BeginEdit { id } => {
            editor.begin_edit(*id)?;
            None
        }
        ScriptStep::SetEditBuffer { text } => {
            editor.set_edit_buffer(text.clone())?;
            None
        }
        ScriptStep::SaveEdit => {
            editor.save_edit()?;
            None
        }
        ScriptStep::CancelEdit => {
            if !editor.cancel_edit() {
                return Err(anyhow!("No item is being edited"));
            }
            None
        }
        ScriptStep::RequestDelete { id } => {
            editor.request_delete(*id)?;
            None
        }
        ScriptStep::ConfirmDelete => {
            editor.confirm_delete()?;
            None
        }
        ScriptStep::CancelDelete => {
            editor.cancel_delete();
            None
        }
        ScriptStep::SetTextColor { color } => {
            editor.text_style_mut().set_color(color)?;
            None
        }
        ScriptStep::SetFontSize { size } => {
            editor.text_style_mut().set_font_size(*size)?;
            None
        }
        ScriptStep::SetFontWeight { weight } => {
            editor.text_style_mut().font_weight = *weight;
            None
        }
        ScriptStep::Save => {
            editor.save();
            None
        }
    };
    Ok(outcome)
}
