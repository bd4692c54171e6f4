//! Layered document model.
//!
//! The extractor and layout describer only need a canvas size and an
//! ordered list of named, positioned layers. `DocumentReader` is the seam
//! between them and the file format; `PsdReader` is the production reader.

mod psd;

use std::path::Path;

use image::{imageops, RgbaImage};

use crate::error::Result;

pub use self::psd::PsdReader;

/// A layer's bounding box in canvas coordinates.
///
/// The box may extend past the canvas edges, so the origin can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl LayerBounds {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build bounds from left/top/right/bottom edges. Inverted edges give an
    /// empty box.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let width = i64::from(right) - i64::from(left);
        let height = i64::from(bottom) - i64::from(top);
        Self {
            x: left,
            y: top,
            width: width.clamp(0, i64::from(u32::MAX)) as u32,
            height: height.clamp(0, i64::from(u32::MAX)) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersect with a `canvas_width` x `canvas_height` canvas.
    ///
    /// Returns `(x, y, width, height)` of the visible part, or `None` when the
    /// box lies entirely outside the canvas.
    pub fn clip_to(&self, canvas_width: u32, canvas_height: u32) -> Option<(u32, u32, u32, u32)> {
        let left = i64::from(self.x).max(0);
        let top = i64::from(self.y).max(0);
        let right = (i64::from(self.x) + i64::from(self.width)).min(i64::from(canvas_width));
        let bottom = (i64::from(self.y) + i64::from(self.height)).min(i64::from(canvas_height));

        if right <= left || bottom <= top {
            return None;
        }

        Some((
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}

/// A named raster region of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub bounds: LayerBounds,
    /// Pixels of the visible part of `bounds`. Empty for group or blank layers.
    pub pixels: RgbaImage,
}

impl Layer {
    /// Build a layer by cutting its bounds out of a full-canvas raster.
    pub fn from_canvas(name: impl Into<String>, bounds: LayerBounds, canvas: &RgbaImage) -> Self {
        let pixels = match bounds.clip_to(canvas.width(), canvas.height()) {
            Some((x, y, w, h)) => imageops::crop_imm(canvas, x, y, w, h).to_image(),
            None => RgbaImage::new(0, 0),
        };

        Self {
            name: name.into(),
            bounds,
            pixels,
        }
    }

    /// True when the layer has no pixels to export.
    pub fn is_empty(&self) -> bool {
        self.pixels.width() == 0 || self.pixels.height() == 0
    }
}

/// A decoded layered document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: u32,
    pub height: u32,
    /// Layers in document order.
    pub layers: Vec<Layer>,
}

/// Reads a layered document from disk.
pub trait DocumentReader {
    fn read(&self, path: &Path) -> Result<Document>;
}
