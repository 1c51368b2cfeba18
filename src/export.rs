//! Raster export of the board surface.
//!
//! Items are painted as flat cards in render order at `scale` times the
//! display resolution. Selection outlines and action buttons are host
//! overlays and never reach this renderer, so they are absent from every
//! export.

use crate::constants::{
    CARD_BACKGROUND, CARD_BORDER, IMAGE_PLACEHOLDER_COLOR, MAX_EXPORT_PIXELS, NOTE_BORDER_WIDTH,
    SWATCH_COLUMNS, SWATCH_GAP, SWATCH_PADDING, SWATCH_SIZE,
};
use crate::error::ExportError;
use crate::geometry::Size;
use crate::types::{BoardItem, ItemContent};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Receives exported images for the system clipboard.
pub trait ClipboardSink {
    /// Implementations return [`ExportError::ClipboardUnavailable`] when the platform refuses.
    fn write_png(&mut self, png: &[u8]) -> Result<(), ExportError>;
}

/// Encoding used by [`to_data_url`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub scale: f32,
    pub background: Rgba<u8>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: crate::constants::DEFAULT_EXPORT_SCALE,
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

/// Parse `#rgb` or `#rrggbb`.
pub fn parse_hex_color(s: &str) -> Option<Rgba<u8>> {
    let hex = s.trim().strip_prefix('#')?;
    let channel = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
    match hex.len() {
        6 => Some(Rgba([channel(0, 2)?, channel(2, 2)?, channel(4, 2)?, 255])),
        3 => {
            let expand = |v: u8| v * 17;
            Some(Rgba([
                expand(channel(0, 1)?),
                expand(channel(1, 1)?),
                expand(channel(2, 1)?),
                255,
            ]))
        }
        _ => None,
    }
}

fn color_or(s: &str, fallback: &str) -> Rgba<u8> {
    parse_hex_color(s).unwrap_or_else(|| {
        warn!(color = s, "unparseable color in export, using fallback");
        parse_hex_color(fallback).unwrap_or(Rgba([0, 0, 0, 255]))
    })
}

/// Device size of an export, or `TooLarge` past [`MAX_EXPORT_PIXELS`].
pub fn export_dimensions(surface: Size, scale: f32) -> Result<(u32, u32), ExportError> {
    let width = (f64::from(surface.width) * f64::from(scale)).round().max(1.0);
    let height = (f64::from(surface.height) * f64::from(scale)).round().max(1.0);
    if width * height > MAX_EXPORT_PIXELS as f64 {
        return Err(ExportError::TooLarge {
            width: width.min(u64::MAX as f64) as u64,
            height: height.min(u64::MAX as f64) as u64,
        });
    }
    Ok((width as u32, height as u32))
}

/// Paint the surface. `items` must already be in render order (bottom first).
pub fn render_surface(
    items: &[&BoardItem],
    surface: Size,
    options: &ExportOptions,
) -> Result<RgbaImage, ExportError> {
    let scale = options.scale;
    let (width, height) = export_dimensions(surface, scale)?;
    let mut canvas = RgbaImage::from_pixel(width, height, options.background);

    for item in items {
        let x = item.position.x * scale;
        let y = item.position.y * scale;
        let w = item.size.width * scale;
        let h = item.size.height * scale;

        match &item.content {
            ItemContent::Image { url, .. } => paint_image(&mut canvas, url, x, y, w, h),
            ItemContent::Text { color, font_size, text, .. } => {
                paint_card(&mut canvas, x, y, w, h, scale);
                // A bar in the text color stands in for the glyph run.
                let pad = 12.0 * scale;
                let bar_h = (*font_size as f32 * scale * 0.6).min(h - 2.0 * pad).max(1.0);
                let approx = text.chars().count() as f32 * *font_size as f32 * 0.5 * scale;
                let bar_w = approx.min(w - 2.0 * pad).max(0.0);
                let bar_y = y + (h - bar_h) / 2.0;
                fill_rect(&mut canvas, x + pad, bar_y, bar_w, bar_h, color_or(color, "#000000"));
            }
            ItemContent::Note { background_color, border_color, .. } => {
                fill_rect(&mut canvas, x, y, w, h, color_or(background_color, "#fef3c7"));
                let border = NOTE_BORDER_WIDTH * scale;
                fill_rect(&mut canvas, x, y, border.min(w), h, color_or(border_color, "#f59e0b"));
            }
            ItemContent::ColorPalette { colors, .. } => {
                paint_card(&mut canvas, x, y, w, h, scale);
                let pad = SWATCH_PADDING * scale;
                let size = SWATCH_SIZE * scale;
                let gap = SWATCH_GAP * scale;
                for (i, color) in colors.iter().enumerate() {
                    let col = (i % SWATCH_COLUMNS) as f32;
                    let row = (i / SWATCH_COLUMNS) as f32;
                    let sx = x + pad + col * (size + gap);
                    let sy = y + pad + row * (size + gap);
                    fill_rect(&mut canvas, sx, sy, size, size, color_or(color, "#000000"));
                }
            }
        }
    }

    debug!(width, height, items = items.len(), "surface rendered");
    Ok(canvas)
}

fn paint_card(canvas: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, scale: f32) {
    let border = scale.max(1.0);
    fill_rect(canvas, x, y, w, h, color_or(CARD_BORDER, "#e2e8f0"));
    fill_rect(
        canvas,
        x + border,
        y + border,
        w - 2.0 * border,
        h - 2.0 * border,
        color_or(CARD_BACKGROUND, "#ffffff"),
    );
}

fn paint_image(canvas: &mut RgbaImage, url: &str, x: f32, y: f32, w: f32, h: f32) {
    let tw = w.round().max(1.0) as u32;
    let th = h.round().max(1.0) as u32;
    match load_local_image(url) {
        Some(img) => {
            let fitted = img.resize_to_fill(tw, th, FilterType::Triangle).to_rgba8();
            imageops::overlay(canvas, &fitted, x.round() as i64, y.round() as i64);
        }
        None => fill_rect(canvas, x, y, w, h, color_or(IMAGE_PLACEHOLDER_COLOR, "#e2e8f0")),
    }
}

/// Only local references can be read; blob/remote URLs paint a placeholder.
fn load_local_image(url: &str) -> Option<DynamicImage> {
    let path = url.strip_prefix("file://").unwrap_or(url);
    let path = Path::new(path);
    if !path.is_file() {
        return None;
    }
    match image::open(path) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to decode image for export");
            None
        }
    }
}

/// Fill a rectangle given in device pixels, clipped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let x0 = x.round().max(0.0) as u32;
    let y0 = y.round().max(0.0) as u32;
    let x1 = ((x + w).round().max(0.0) as u32).min(canvas.width());
    let y1 = ((y + h).round().max(0.0) as u32).min(canvas.height());
    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, color);
        }
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// `quality` is in `[0, 1]` and only affects JPEG.
pub fn to_data_url(image: &RgbaImage, format: ExportFormat, quality: f32) -> Result<String, ExportError> {
    let bytes = match format {
        ExportFormat::Png => encode_png(image)?,
        ExportFormat::Jpeg => {
            let mut buf = Vec::new();
            let q = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, q))?;
            buf
        }
    };
    Ok(format!("data:{};base64,{}", format.mime(), STANDARD.encode(bytes)))
}

/// Write `<dir>/<name>.png`, going through a temp file in the same directory.
pub fn save_png(image: &RgbaImage, dir: &Path, name: &str) -> Result<PathBuf, ExportError> {
    let bytes = encode_png(image)?;
    let target = dir.join(format!("{}.png", sanitize_file_stem(name)));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    std::io::Write::write_all(&mut tmp, &bytes)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(target)
}

pub fn copy_to_clipboard(image: &RgbaImage, sink: &mut dyn ClipboardSink) -> Result<(), ExportError> {
    let bytes = encode_png(image)?;
    sink.write_png(&bytes)
}

fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') { '-' } else { c })
        .collect();
    if cleaned.is_empty() {
        crate::constants::DEFAULT_EXPORT_NAME.to_string()
    } else {
        cleaned
    }
}
