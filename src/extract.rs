//! Layer extraction: one PNG per document layer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Document, Layer};
use crate::error::{Result, SpriteError};
use crate::output::{display_path, Printer};

/// Output file name for a layer: `<name>.png`.
///
/// Path separators in the layer name are replaced so the file always lands
/// directly inside the destination folder.
pub fn layer_file_name(layer: &Layer) -> String {
    let name: String = layer
        .name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.png", name)
}

/// Write every non-empty layer of `document` as a PNG into `destination`.
///
/// Creates the destination folder if needed. Returns the paths written, in
/// document order.
pub fn write_layer_images(
    document: &Document,
    destination: &Path,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(destination).map_err(|e| SpriteError::Io {
        path: destination.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut written = Vec::with_capacity(document.layers.len());

    for layer in &document.layers {
        if layer.is_empty() {
            printer.warning(
                "Skipping",
                &format!("layer '{}' has no pixels", layer.name),
            );
            continue;
        }

        let path = destination.join(layer_file_name(layer));
        layer.pixels.save(&path).map_err(|e| SpriteError::Io {
            path: path.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;

        printer.status(
            "Writing",
            &format!(
                "{} ({}x{})",
                display_path(&path),
                layer.pixels.width(),
                layer.pixels.height()
            ),
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LayerBounds;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn layer(name: &str, w: u32, h: u32) -> Layer {
        Layer {
            name: name.to_string(),
            bounds: LayerBounds::new(0, 0, w, h),
            pixels: RgbaImage::from_pixel(w, h, Rgba([9, 8, 7, 255])),
        }
    }

    #[test]
    fn test_layer_file_name() {
        assert_eq!(layer_file_name(&layer("arm_left", 1, 1)), "arm_left.png");
    }

    #[test]
    fn test_layer_file_name_strips_separators() {
        assert_eq!(layer_file_name(&layer("body/arm\\hand", 1, 1)), "body_arm_hand.png");
    }

    #[test]
    fn test_write_layer_images() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("layers");
        let document = Document {
            width: 32,
            height: 32,
            layers: vec![layer("head", 4, 3), layer("tail", 2, 6)],
        };

        let written = write_layer_images(&document, &out, &Printer::new()).unwrap();

        assert_eq!(written, vec![out.join("head.png"), out.join("tail.png")]);
        let head = image::open(out.join("head.png")).unwrap().to_rgba8();
        assert_eq!(head.dimensions(), (4, 3));
        assert_eq!(head.get_pixel(0, 0), &Rgba([9, 8, 7, 255]));
    }

    #[test]
    fn test_write_layer_images_skips_empty() {
        let dir = tempdir().unwrap();
        let document = Document {
            width: 16,
            height: 16,
            layers: vec![layer("group", 0, 0), layer("eye", 2, 2)],
        };

        let written = write_layer_images(&document, dir.path(), &Printer::new()).unwrap();

        assert_eq!(written, vec![dir.path().join("eye.png")]);
        assert!(!dir.path().join("group.png").exists());
    }
}
