//! PSD documents via the `psd` crate.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, SpriteError};

use super::{Document, DocumentReader, Layer, LayerBounds};

/// Reads Photoshop documents.
///
/// Layer pixels are limited to the document canvas; the reported bounds are
/// the layer's full bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct PsdReader;

impl DocumentReader for PsdReader {
    fn read(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path).map_err(|e| SpriteError::DocumentLoad {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?;

        let psd = ::psd::Psd::from_bytes(&bytes).map_err(|e| SpriteError::DocumentLoad {
            path: path.to_path_buf(),
            message: format!("Failed to parse PSD: {}", e),
        })?;

        let (width, height) = (psd.width(), psd.height());
        let mut layers = Vec::with_capacity(psd.layers().len());

        for layer in psd.layers() {
            let bounds = LayerBounds::from_edges(
                layer.layer_left(),
                layer.layer_top(),
                layer.layer_right(),
                layer.layer_bottom(),
            );

            let canvas = RgbaImage::from_raw(width, height, layer.rgba()).ok_or_else(|| {
                SpriteError::DocumentLoad {
                    path: path.to_path_buf(),
                    message: format!(
                        "Layer '{}' pixel data does not match the {}x{} canvas",
                        layer.name(),
                        width,
                        height
                    ),
                }
            })?;

            layers.push(Layer::from_canvas(layer.name(), bounds, &canvas));
        }

        Ok(Document {
            width,
            height,
            layers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = PsdReader.read(&dir.path().join("missing.psd")).unwrap_err();
        assert!(matches!(err, SpriteError::DocumentLoad { .. }));
    }

    #[test]
    fn test_not_a_psd() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.psd");
        fs::write(&path, b"definitely not a photoshop file").unwrap();

        let err = PsdReader.read(&path).unwrap_err();
        assert!(matches!(err, SpriteError::DocumentLoad { .. }));
    }
}
