//! Crop engine: pan/zoom state and square rasterization.
//!
//! A session owns the in-flight source image and its position within a fixed
//! square viewport. All transitions are functions of the session state plus
//! the input; there is no hidden global state, and independent sessions
//! (create flow, edit flow) never share anything.

use std::io::Cursor;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::AppError;

/// Pointer-driven pan capability.
pub mod pointer;


/// Smallest zoom the engine will hold. Rasterization divides by the scale,
/// so a literal zero is a degenerate state the session must never reach.
pub const SCALE_FLOOR: f32 = 0.01;

/// Initial-fit margin so the image starts slightly larger than the viewport
/// and panning is immediately possible.
const OVERSCAN: f32 = 1.1;

/// One image-positioning session.
///
/// Created idle; [`begin`](Self::begin) loads an image and resets the view,
/// [`clear`](Self::clear) returns to idle when the surrounding form is
/// saved, canceled, or reset.
#[derive(Debug, Clone)]
pub struct CropSession {
    image: Option<RgbaImage>,
    viewport: u32,
    scale: f32,
    x: f32,
    y: f32,
}

impl Default for CropSession {
    fn default() -> Self {
        Self {
            image: None,
            viewport: 0,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl CropSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a source image and compute the initial fit.
    ///
    /// The scale starts at the smaller-fit dimension covering the viewport
    /// with a 10% overscan, clamped into `[SCALE_FLOOR, 1.0]`; the pan
    /// offsets reset to center.
    pub fn begin(&mut self, image: RgbaImage, viewport_px: u32) {
        let (w, h) = image.dimensions();
        let vp = viewport_px as f32;
        let fit = (vp / w as f32).max(vp / h as f32) * OVERSCAN;

        self.image = Some(image);
        self.viewport = viewport_px;
        self.scale = fit.clamp(SCALE_FLOOR, 1.0);
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Discard the session state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    pub fn viewport(&self) -> u32 {
        self.viewport
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pan offsets in pixels from center.
    pub fn offset(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Zoom as an integer percent for the host's indicator.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Shift the image by a pointer delta.
    ///
    /// Each axis is clamped independently so the scaled image never exposes
    /// empty space inside the viewport.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if self.image.is_none() {
            return;
        }
        self.x += dx;
        self.y += dy;
        self.clamp_offsets();
    }

    /// Scale by a factor (1.2 zooms in, 0.8 zooms out).
    ///
    /// The offsets are re-clamped afterwards: a changed scale changes the
    /// valid pan range.
    pub fn zoom(&mut self, factor: f32) {
        if self.image.is_none() {
            return;
        }
        self.scale = (self.scale * factor).clamp(SCALE_FLOOR, 1.0);
        self.clamp_offsets();
    }

    fn clamp_offsets(&mut self) {
        let Some(image) = &self.image else { return };
        let (w, h) = image.dimensions();
        let vp = self.viewport as f32;
        let max_x = ((w as f32 * self.scale - vp) / 2.0).max(0.0);
        let max_y = ((h as f32 * self.scale - vp) / 2.0).max(0.0);
        self.x = self.x.clamp(-max_x, max_x);
        self.y = self.y.clamp(-max_y, max_y);
    }

    /// Rasterize exactly what the viewport shows into a standalone square
    /// buffer.
    ///
    /// The viewport square is mapped back into source coordinates and the
    /// covered rectangle, clamped to the source bounds, is copied in. Parts
    /// of the square that fall outside the source stay transparent; that is
    /// accepted, not corrected.
    ///
    /// # Errors
    /// `Validation` when no image is loaded.
    pub fn rasterize(&self) -> Result<RgbaImage, AppError> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| AppError::Validation("no image loaded".to_string()))?;

        let (w, h) = image.dimensions();
        let vp = self.viewport;
        let vpf = vp as f32;
        let scale = self.scale.max(SCALE_FLOOR);

        let source_size = vpf / scale;
        let source_x = w as f32 / 2.0 - vpf / (2.0 * scale) - self.x / scale;
        let source_y = h as f32 / 2.0 - vpf / (2.0 * scale) - self.y / scale;

        let mut out = RgbaImage::new(vp, vp);

        let x0 = source_x.max(0.0);
        let y0 = source_y.max(0.0);
        let x1 = (source_x + source_size).min(w as f32);
        let y1 = (source_y + source_size).min(h as f32);
        if x1 <= x0 || y1 <= y0 {
            return Ok(out);
        }

        let crop_x = x0.floor() as u32;
        let crop_y = y0.floor() as u32;
        let crop_w = ((x1 - x0).round() as u32).clamp(1, w - crop_x);
        let crop_h = ((y1 - y0).round() as u32).clamp(1, h - crop_y);

        // Anchor the patch edges in viewport coordinates so rounding drift
        // cannot leave a stray transparent border on a fully-covered view.
        let dest_x0 = (((x0 - source_x) * scale).round().max(0.0) as u32).min(vp);
        let dest_y0 = (((y0 - source_y) * scale).round().max(0.0) as u32).min(vp);
        let dest_x1 = (((x1 - source_x) * scale).round() as u32).min(vp);
        let dest_y1 = (((y1 - source_y) * scale).round() as u32).min(vp);
        if dest_x1 <= dest_x0 || dest_y1 <= dest_y0 {
            return Ok(out);
        }

        let patch = imageops::crop_imm(image, crop_x, crop_y, crop_w, crop_h).to_image();
        let patch = imageops::resize(
            &patch,
            dest_x1 - dest_x0,
            dest_y1 - dest_y0,
            FilterType::Triangle,
        );
        imageops::replace(&mut out, &patch, i64::from(dest_x0), i64::from(dest_y0));

        Ok(out)
    }
}

/// Decode an image file into the engine's working format.
///
/// # Errors
/// Propagates decode errors from the image crate.
pub fn load_image(path: &Path) -> Result<RgbaImage, AppError> {
    let image = image::open(path)?;
    Ok(image.to_rgba8())
}

/// Encode a rasterized buffer as PNG bytes, ready to embed in a card.
///
/// # Errors
/// Propagates encode errors from the image crate.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}
