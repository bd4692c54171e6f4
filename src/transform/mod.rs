//! Sprite transforms.
//!
//! Trimming to the opaque bounding box, and the pad-and-place resize that
//! fits trimmed content to a target aspect ratio.

mod aspect;
mod trim;

pub use aspect::{place_on_canvas, resize_to_aspect_ratio, CanvasPlan, GrowAxis};
pub use trim::{opaque_bounds, trim};
