//! Export actions with user-facing notifications.

use super::BoardEditor;
use crate::error::ExportError;
use crate::export::{self, ClipboardSink, ExportFormat, ExportOptions, parse_hex_color};
use crate::notifications::Toast;
use crate::profile_scope;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

impl BoardEditor {
    /// Export options derived from settings. An invalid background falls back to white.
    pub fn export_options(&self) -> ExportOptions {
        let mut options = ExportOptions {
            scale: self.settings.export_scale,
            ..ExportOptions::default()
        };
        match parse_hex_color(&self.settings.export_background) {
            Some(color) => options.background = color,
            None => warn!(color = %self.settings.export_background, "invalid export background, using white"),
        }
        options
    }

    /// Rasterize the surface as currently laid out.
    pub fn export_image(&mut self) -> Result<RgbaImage, ExportError> {
        profile_scope!("export_image");
        let result = self.render();
        if let Err(e) = &result {
            self.notify_export_error(e);
        }
        result
    }

    /// Save `<dir>/<board title>.png`.
    pub fn export_to_file(&mut self, dir: &Path) -> Result<PathBuf, ExportError> {
        profile_scope!("export_to_file");
        let result = self
            .render()
            .and_then(|img| export::save_png(&img, dir, &self.board.title));
        match &result {
            Ok(path) => {
                info!(path = %path.display(), "board exported");
                self.toasts.push(
                    Toast::success("Your mood board has been downloaded.").with_title("Export complete"),
                );
            }
            Err(e) => self.notify_export_error(e),
        }
        result
    }

    pub fn export_data_url(&mut self, format: ExportFormat, quality: f32) -> Result<String, ExportError> {
        let result = self
            .render()
            .and_then(|img| export::to_data_url(&img, format, quality));
        if let Err(e) = &result {
            self.notify_export_error(e);
        }
        result
    }

    pub fn copy_to_clipboard(&mut self, sink: &mut dyn ClipboardSink) -> Result<(), ExportError> {
        let result = self
            .render()
            .and_then(|img| export::copy_to_clipboard(&img, sink));
        match &result {
            Ok(()) => {
                info!("board copied to clipboard");
                self.toasts
                    .push(Toast::success("Board image copied to clipboard.").with_title("Copied"));
            }
            Err(e) => self.notify_export_error(e),
        }
        result
    }

    fn render(&self) -> Result<RgbaImage, ExportError> {
        let surface = self.surface_size.ok_or(ExportError::SurfaceMissing)?;
        let items = self.render_order();
        export::render_surface(&items, surface, &self.export_options())
    }

    fn notify_export_error(&mut self, err: &ExportError) {
        error!(error = %err, "export failed");
        self.toasts.push(
            Toast::error("Failed to export mood board. Please try again.").with_title("Export failed"),
        );
    }
}
