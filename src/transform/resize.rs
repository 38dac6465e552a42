//! Aspect-preserving resampling.
//!
//! Frames are resampled down to LED resolution (36–144 pixels wide), where
//! aliasing is very visible on the spun image. Lanczos3 keeps fine detail
//! acceptable at those widths.

use image::{RgbImage, imageops, imageops::FilterType};
use tracing::debug;

use crate::error::SpinpoiError;

/// Resize to an exact target width, scaling height proportionally.
///
/// The output width always equals `target_width`; the height is
/// `round(height * target_width / width)`, clamped to at least 1 so that
/// extreme aspect ratios never produce an empty image.
///
/// Returns [`SpinpoiError::InvalidDimension`] if `target_width` is zero or
/// the source image has no pixels.
pub fn resize_to_width(img: &RgbImage, target_width: u32) -> Result<RgbImage, SpinpoiError> {
    let (w, h) = img.dimensions();
    if target_width == 0 {
        return Err(SpinpoiError::InvalidDimension(
            "target width must be positive".to_string(),
        ));
    }
    if w == 0 || h == 0 {
        return Err(SpinpoiError::InvalidDimension(format!(
            "source image is {w}x{h}"
        )));
    }

    let scale = target_width as f64 / w as f64;
    let target_height = ((h as f64 * scale).round() as u32).max(1);
    debug!(w, h, target_width, target_height, "Resizing to width");

    Ok(imageops::resize(
        img,
        target_width,
        target_height,
        FilterType::Lanczos3,
    ))
}

/// Resize to an exact target height, preserving the current width.
///
/// Used by the polar renderer to squeeze the strip to the angular step
/// height. Same error conditions as [`resize_to_width`].
pub fn resize_to_height(img: &RgbImage, target_height: u32) -> Result<RgbImage, SpinpoiError> {
    let (w, h) = img.dimensions();
    if target_height == 0 {
        return Err(SpinpoiError::InvalidDimension(
            "target height must be positive".to_string(),
        ));
    }
    if w == 0 || h == 0 {
        return Err(SpinpoiError::InvalidDimension(format!(
            "source image is {w}x{h}"
        )));
    }

    debug!(w, h, target_height, "Resizing to height");
    Ok(imageops::resize(img, w, target_height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_output_width_is_exact() {
        let img = RgbImage::from_pixel(100, 50, Rgb([9, 9, 9]));
        for w in [1, 36, 60, 72, 120, 144, 600] {
            let resized = resize_to_width(&img, w).unwrap();
            assert_eq!(resized.width(), w);
        }
    }

    #[test]
    fn test_height_is_rounded_proportional() {
        let img = RgbImage::from_pixel(100, 50, Rgb([9, 9, 9]));
        // 50 * 36/100 = 18
        assert_eq!(resize_to_width(&img, 36).unwrap().height(), 18);
        // 50 * 75/100 = 37.5 -> 38
        assert_eq!(resize_to_width(&img, 75).unwrap().height(), 38);
    }

    #[test]
    fn test_height_clamps_to_one() {
        // 2 * 10/1000 = 0.02 -> would round to zero
        let img = RgbImage::from_pixel(1000, 2, Rgb([9, 9, 9]));
        let resized = resize_to_width(&img, 10).unwrap();
        assert_eq!(resized.dimensions(), (10, 1));
    }

    #[test]
    fn test_zero_target_width_errors() {
        let img = RgbImage::from_pixel(10, 10, Rgb([9, 9, 9]));
        assert!(matches!(
            resize_to_width(&img, 0),
            Err(SpinpoiError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_empty_source_errors() {
        let img = RgbImage::new(0, 10);
        assert!(matches!(
            resize_to_width(&img, 36),
            Err(SpinpoiError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_resize_to_height_preserves_width() {
        let img = RgbImage::from_pixel(40, 500, Rgb([9, 9, 9]));
        let resized = resize_to_height(&img, 120).unwrap();
        assert_eq!(resized.dimensions(), (40, 120));
    }

    #[test]
    fn test_resize_to_height_zero_errors() {
        let img = RgbImage::from_pixel(10, 10, Rgb([9, 9, 9]));
        assert!(matches!(
            resize_to_height(&img, 0),
            Err(SpinpoiError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_solid_color_survives_resampling() {
        // Lanczos ringing cannot appear on a constant field; allow only
        // rounding-level wiggle.
        let img = RgbImage::from_pixel(200, 100, Rgb([255, 0, 0]));
        let resized = resize_to_width(&img, 36).unwrap();
        for px in resized.pixels() {
            assert!(px[0] >= 250, "red channel dropped to {}", px[0]);
            assert!(px[1] <= 5 && px[2] <= 5);
        }
    }
}
