use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spriteprep operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    #[diagnostic(code(spriteprep::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(spriteprep::io))]
    Io { path: PathBuf, message: String },

    #[error("Failed to load document {path}: {message}")]
    #[diagnostic(
        code(spriteprep::document),
        help("Check that the file is a readable layered PSD document")
    )]
    DocumentLoad { path: PathBuf, message: String },

    #[error("Image has no opaque pixels ({width}x{height})")]
    #[diagnostic(
        code(spriteprep::empty_image),
        help("Fully transparent images cannot be trimmed; remove them from the source folder")
    )]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(spriteprep::parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to process {path}")]
    #[diagnostic(code(spriteprep::file))]
    File {
        path: PathBuf,
        #[source]
        source: Box<SpriteError>,
    },

    #[error("{failed} of {total} file(s) failed")]
    #[diagnostic(
        code(spriteprep::batch),
        help("See the per-file errors above; successfully resized files were still written")
    )]
    Batch { failed: usize, total: usize },
}

impl SpriteError {
    /// Attach the file being processed to an error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        SpriteError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpriteError>;
