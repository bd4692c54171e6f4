//! Trimming images to their opaque content.

use image::{imageops, RgbaImage};

use crate::error::{Result, SpriteError};
use crate::types::Bounds;

/// Find the smallest rectangle containing every pixel with non-zero alpha.
///
/// Returns `None` when the image is fully transparent or has no pixels.
pub fn opaque_bounds(img: &RgbaImage) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        match bounds.as_mut() {
            Some(b) => b.include(x, y),
            None => bounds = Some(Bounds::new(x, y, x + 1, y + 1)),
        }
    }

    bounds
}

/// Crop an image to its opaque bounding box.
///
/// Fails with `EmptyImage` instead of producing a zero-sized image.
pub fn trim(img: &RgbaImage) -> Result<RgbaImage> {
    let bounds = opaque_bounds(img).ok_or(SpriteError::EmptyImage {
        width: img.width(),
        height: img.height(),
    })?;

    Ok(imageops::crop_imm(img, bounds.x1, bounds.y1, bounds.width(), bounds.height()).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_opaque_bounds_single_pixel() {
        let mut img = RgbaImage::from_pixel(8, 8, CLEAR);
        img.put_pixel(3, 5, RED);

        assert_eq!(opaque_bounds(&img), Some(Bounds::new(3, 5, 4, 6)));
    }

    #[test]
    fn test_opaque_bounds_fully_opaque() {
        let img = RgbaImage::from_pixel(6, 4, RED);
        assert_eq!(opaque_bounds(&img), Some(Bounds::new(0, 0, 6, 4)));
    }

    #[test]
    fn test_opaque_bounds_transparent() {
        let img = RgbaImage::from_pixel(6, 4, CLEAR);
        assert_eq!(opaque_bounds(&img), None);
    }

    #[test]
    fn test_opaque_bounds_ignores_colour_of_clear_pixels() {
        // Colour channels without alpha do not count as content
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        img.put_pixel(1, 2, Rgba([0, 0, 0, 1]));
        assert_eq!(opaque_bounds(&img), Some(Bounds::new(1, 2, 2, 3)));
    }

    #[test]
    fn test_trim_crops_to_content() {
        let mut img = RgbaImage::from_pixel(10, 10, CLEAR);
        img.put_pixel(2, 3, RED);
        img.put_pixel(6, 4, Rgba([0, 255, 0, 128]));

        let trimmed = trim(&img).unwrap();

        assert_eq!(trimmed.dimensions(), (5, 2));
        assert_eq!(trimmed.get_pixel(0, 0), &RED);
        assert_eq!(trimmed.get_pixel(4, 1), &Rgba([0, 255, 0, 128]));
        assert_eq!(trimmed.get_pixel(4, 0), &CLEAR);
    }

    #[test]
    fn test_trim_opaque_image_unchanged() {
        let img = RgbaImage::from_pixel(3, 7, RED);
        let trimmed = trim(&img).unwrap();
        assert_eq!(trimmed, img);
    }

    #[test]
    fn test_trim_transparent_fails() {
        let img = RgbaImage::from_pixel(5, 3, CLEAR);
        let err = trim(&img).unwrap_err();
        assert!(matches!(
            err,
            SpriteError::EmptyImage {
                width: 5,
                height: 3
            }
        ));
    }

    #[test]
    fn test_trim_zero_sized_fails() {
        let img = RgbaImage::new(0, 0);
        assert!(trim(&img).is_err());
    }
}
