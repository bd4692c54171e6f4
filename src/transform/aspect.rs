//! Aspect-ratio canvas fitting.
//!
//! Content is never resampled: the trimmed sprite is pasted unchanged onto a
//! larger transparent canvas whose proportions match the target ratio, so a
//! mesh with that ratio displays the sprite without distortion.

use image::{imageops, Rgba, RgbaImage};

use crate::error::{Result, SpriteError};
use crate::types::ResizeParams;

use super::trim;

/// Fixed border added to each canvas dimension so centered content never
/// touches the edge after truncation.
const EDGE_PADDING: f64 = 2.0;

/// Largest canvas buffer the resizer will allocate (1 GiB of RGBA, e.g.
/// 16384 x 16384).
pub const MAX_CANVAS_BYTES: u64 = 1 << 30;

/// Which canvas dimension is grown to reach the target ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowAxis {
    Width,
    Height,
}

/// The numeric layout of a resized canvas, computed from the trimmed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPlan {
    pub local_width: u32,
    pub local_height: u32,
    pub axis: GrowAxis,
    pub scale_factor: f64,
    /// Canvas size after ratio matching, before fudge and edge padding.
    pub unpadded_width: f64,
    pub unpadded_height: f64,
    /// Canvas size after fudge and edge padding, before truncation.
    pub target_width: f64,
    pub target_height: f64,
    /// Top-left paste position including the offset. May lie outside the canvas.
    pub paste_x: i64,
    pub paste_y: i64,
}

impl CanvasPlan {
    /// Plan a canvas for trimmed content of `local_width` x `local_height`.
    ///
    /// Both dimensions must be non-zero; `trim` guarantees this.
    pub fn compute(local_width: u32, local_height: u32, params: &ResizeParams) -> Self {
        let lw = f64::from(local_width);
        let lh = f64::from(local_height);
        let local_ratio = lw / lh;
        let target_ratio = params.ratio.get();
        let fudge = params.fudge.get().max(1.0);

        // Ties take the height branch, where the scale works out to exactly 1.0
        let (axis, scale_factor, unpadded_width, unpadded_height) = if target_ratio > local_ratio {
            let scale = target_ratio / local_ratio;
            (GrowAxis::Width, scale, lw * scale, lh)
        } else {
            let local_inv_ratio = 1.0 / local_ratio;
            let target_inv_ratio = 1.0 / target_ratio;
            let scale = target_inv_ratio / local_inv_ratio;
            (GrowAxis::Height, scale, lw, lh * scale)
        };

        let target_width = unpadded_width * fudge + EDGE_PADDING;
        let target_height = unpadded_height * fudge + EDGE_PADDING;

        let paste_center_x = (target_width - 1.0) * 0.5;
        let paste_center_y = (target_height - 1.0) * 0.5;
        // `as` truncates toward zero
        let origin_x = (paste_center_x - lw * 0.5) as i64;
        let origin_y = (paste_center_y - lh * 0.5) as i64;

        Self {
            local_width,
            local_height,
            axis,
            scale_factor,
            unpadded_width,
            unpadded_height,
            target_width,
            target_height,
            paste_x: origin_x + i64::from(params.offset.x),
            paste_y: origin_y + i64::from(params.offset.y),
        }
    }

    /// Allocated canvas size (truncated, not rounded).
    ///
    /// Fails when a huge fudge factor or an extreme ratio asks for a canvas
    /// that does not fit in `u32` or exceeds [`MAX_CANVAS_BYTES`].
    pub fn canvas_size(&self) -> Result<(u32, u32)> {
        let too_large = || SpriteError::InvalidParameter {
            message: format!(
                "Canvas of {:.0}x{:.0} is too large for {}x{} content",
                self.target_width, self.target_height, self.local_width, self.local_height
            ),
            help: Some(format!(
                "Use a smaller fudge factor or a ratio closer to {:.3}",
                f64::from(self.local_width) / f64::from(self.local_height)
            )),
        };

        let max = f64::from(u32::MAX);
        if !(self.target_width.is_finite() && self.target_width <= max)
            || !(self.target_height.is_finite() && self.target_height <= max)
        {
            return Err(too_large());
        }

        let width = self.target_width as u32;
        let height = self.target_height as u32;
        if u64::from(width) * u64::from(height) * 4 > MAX_CANVAS_BYTES {
            return Err(too_large());
        }

        Ok((width, height))
    }
}

/// Paste already-trimmed content onto a fresh transparent canvas.
///
/// Pixels replace the canvas rather than blending; anything falling outside
/// the canvas is clipped.
pub fn place_on_canvas(trimmed: &RgbaImage, plan: &CanvasPlan) -> Result<RgbaImage> {
    let (width, height) = plan.canvas_size()?;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    imageops::replace(&mut canvas, trimmed, plan.paste_x, plan.paste_y);
    Ok(canvas)
}

/// Trim an image and re-place it on a canvas matching the target ratio.
pub fn resize_to_aspect_ratio(img: &RgbaImage, params: &ResizeParams) -> Result<RgbaImage> {
    let trimmed = trim(img)?;
    let plan = CanvasPlan::compute(trimmed.width(), trimmed.height(), params);
    place_on_canvas(&trimmed, &plan)
}
