//! Source folder scanning.
//!
//! Only the immediate children of the source folder are considered; the
//! extension match is exact and case-sensitive.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SpriteError};

/// Extension (without the dot) of files the batch resizer picks up.
pub const IMAGE_EXTENSION: &str = "png";

/// Check whether a path has exactly the given extension.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// List regular files directly inside `folder` whose extension is `extension`.
///
/// Subdirectories are neither returned nor descended into. Files come back in
/// the order the filesystem enumerates them.
pub fn scan_folder(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(SpriteError::Io {
            path: folder.to_path_buf(),
            message: "Source folder not found".to_string(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|e| SpriteError::Io {
            path: folder.to_path_buf(),
            message: format!("Failed to read source folder: {}", e),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
