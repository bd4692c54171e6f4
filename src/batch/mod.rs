//! Batch sprite resizing.
//!
//! Applies the aspect-ratio resize to every `png` directly inside a source
//! folder and writes the results, under the same file names, into a
//! destination folder. Files are processed one at a time in enumeration order.
//!
//! # Example
//!
//! ```ignore
//! use spriteprep::batch::{run_batch, BatchJob};
//!
//! let job = BatchJob::new("sprites/", "prepared/", params);
//! let report = run_batch(&job, &Printer::new())?;
//! println!("Wrote {} files", report.processed());
//! ```

mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};
use crate::transform::{place_on_canvas, trim, CanvasPlan};
use crate::types::ResizeParams;

pub use scanner::{has_extension, scan_folder, IMAGE_EXTENSION};

/// What to do when one file in the batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and return its error.
    #[default]
    Abort,
    /// Record the failure and continue with the next file.
    KeepGoing,
}

/// One immutable batch run.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub params: ResizeParams,
    pub policy: FailurePolicy,
}

impl BatchJob {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        params: ResizeParams,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            params,
            policy: FailurePolicy::Abort,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Result of processing a single file.
#[derive(Debug)]
pub enum FileOutcome {
    Written {
        source: PathBuf,
        destination: PathBuf,
        width: u32,
        height: u32,
    },
    Failed {
        source: PathBuf,
        error: SpriteError,
    },
}

impl FileOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, FileOutcome::Written { .. })
    }
}

/// Per-file outcomes of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of files successfully written.
    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.total() - self.processed()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &SpriteError)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed { source, error } => Some((source.as_path(), error)),
            FileOutcome::Written { .. } => None,
        })
    }

    /// Turn a report with failures into a `Batch` error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SpriteError::Batch {
                failed: self.failed(),
                total: self.total(),
            })
        }
    }
}

/// Run a batch job.
///
/// Creates the destination folder if needed and overwrites existing files.
/// With `FailurePolicy::Abort` the first failing file ends the run with an
/// error naming that file.
pub fn run_batch(job: &BatchJob, printer: &Printer) -> Result<BatchReport> {
    fs::create_dir_all(&job.destination).map_err(|e| SpriteError::Io {
        path: job.destination.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let files = scan_folder(&job.source, IMAGE_EXTENSION)?;
    printer.info(
        "Found",
        &format!(
            "{} in {}",
            plural(files.len(), "image", "images"),
            display_path(&job.source)
        ),
    );

    let mut report = BatchReport::default();

    for source in files {
        match resize_file(&source, &job.destination, &job.params, printer) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(error) => match job.policy {
                FailurePolicy::Abort => return Err(error.in_file(source)),
                FailurePolicy::KeepGoing => report.outcomes.push(FileOutcome::Failed { source, error }),
            },
        }
    }

    Ok(report)
}

/// Load, trim, re-place and save one image into `destination_dir`.
pub fn resize_file(
    source: &Path,
    destination_dir: &Path,
    params: &ResizeParams,
    printer: &Printer,
) -> Result<FileOutcome> {
    let file_name = source.file_name().ok_or_else(|| SpriteError::Io {
        path: source.to_path_buf(),
        message: "Path has no file name".to_string(),
    })?;
    let destination = destination_dir.join(file_name);

    let img = image::open(source)
        .map_err(|e| SpriteError::Io {
            path: source.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    let trimmed = trim(&img)?;
    let plan = CanvasPlan::compute(trimmed.width(), trimmed.height(), params);
    printer.verbose(
        "Planned",
        &format!(
            "{}: {}x{} content, scale {:.4} on {:?}, paste at ({}, {})",
            display_path(source),
            plan.local_width,
            plan.local_height,
            plan.scale_factor,
            plan.axis,
            plan.paste_x,
            plan.paste_y
        ),
    );

    let canvas = place_on_canvas(&trimmed, &plan)?;
    canvas.save(&destination).map_err(|e| SpriteError::Io {
        path: destination.clone(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    printer.status(
        "Writing",
        &format!(
            "{} ({}x{})",
            display_path(&destination),
            canvas.width(),
            canvas.height()
        ),
    );

    Ok(FileOutcome::Written {
        source: source.to_path_buf(),
        destination,
        width: canvas.width(),
        height: canvas.height(),
    })
}
