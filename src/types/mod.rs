//! Core domain types for spriteprep.
//!
//! This module contains the value types shared by the pipelines:
//! - `Bounds` - pixel rectangles such as the opaque bounding box
//! - `AspectRatio`, `FudgeFactor`, `Offset` - validated resize parameters

mod bounds;
mod params;

pub use bounds::Bounds;
pub use params::{AspectRatio, FudgeFactor, Offset, ResizeParams};
