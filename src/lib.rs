//! spriteprep - PSD layer export and sprite swap preparation
//!
//! A library for splitting layered PSD documents into per-layer images and
//! layout metadata, and for padding batches of transparent sprites to the
//! aspect ratio of a target mesh.

pub mod batch;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod layout;
pub mod output;
pub mod transform;
pub mod types;

pub use batch::{run_batch, BatchJob, BatchReport, FailurePolicy, FileOutcome};
pub use config::JobConfig;
pub use document::{Document, DocumentReader, Layer, LayerBounds, PsdReader};
pub use error::{Result, SpriteError};
pub use extract::write_layer_images;
pub use layout::{Header, Layout, Region};
pub use transform::{opaque_bounds, place_on_canvas, resize_to_aspect_ratio, trim, CanvasPlan, GrowAxis};
pub use types::{AspectRatio, Bounds, FudgeFactor, Offset, ResizeParams};
