//! Normalization of decoded images to plain 8-bit RGB.
//!
//! Everything downstream of decoding (codec, polar renderer) operates on
//! [`RgbImage`] only. Decoded photographs arrive in whatever mode the file
//! used; this gate converts the modes that reduce to RGB without losing
//! information and rejects the rest.

use image::{DynamicImage, RgbImage};

use crate::error::SpinpoiError;

/// Convert a decoded image to plain RGB, or fail if that would lose data.
///
/// Accepted losslessly:
/// - 8-bit RGB (taken as-is)
/// - 8-bit grayscale (expanded to RGB)
/// - 8-bit RGBA / grayscale+alpha **only** when every alpha value is 255
///
/// Anything else — translucent images, 16-bit or floating-point modes —
/// returns [`SpinpoiError::UnsupportedColorMode`]. Callers that want lossy
/// conversion must do it themselves before entering the pipeline.
pub fn ensure_rgb(img: &DynamicImage) -> Result<RgbImage, SpinpoiError> {
    match img {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb.clone()),
        DynamicImage::ImageLuma8(_) => Ok(img.to_rgb8()),
        DynamicImage::ImageRgba8(rgba) => {
            if rgba.pixels().all(|px| px[3] == u8::MAX) {
                Ok(img.to_rgb8())
            } else {
                Err(SpinpoiError::UnsupportedColorMode(
                    "RGBA image carries transparency".to_string(),
                ))
            }
        }
        DynamicImage::ImageLumaA8(la) => {
            if la.pixels().all(|px| px[1] == u8::MAX) {
                Ok(img.to_rgb8())
            } else {
                Err(SpinpoiError::UnsupportedColorMode(
                    "grayscale image carries transparency".to_string(),
                ))
            }
        }
        other => Err(SpinpoiError::UnsupportedColorMode(format!(
            "{:?} cannot be losslessly reduced to RGB",
            other.color()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{LumaA, Rgb, Rgba, RgbaImage};

    #[test]
    fn test_rgb_passes_through() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let rgb = ensure_rgb(&img).unwrap();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([1, 2, 3]));
    }

    #[test]
    fn test_grayscale_expands() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(2, 2, image::Luma([77])));
        let rgb = ensure_rgb(&img).unwrap();
        assert_eq!(rgb.get_pixel(1, 1), &Rgb([77, 77, 77]));
    }

    #[test]
    fn test_opaque_rgba_accepted() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([5, 6, 7, 255])));
        let rgb = ensure_rgb(&img).unwrap();
        assert_eq!(rgb.get_pixel(0, 1), &Rgb([5, 6, 7]));
    }

    #[test]
    fn test_translucent_rgba_rejected() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([5, 6, 7, 128])));
        assert!(matches!(
            ensure_rgb(&img),
            Err(SpinpoiError::UnsupportedColorMode(_))
        ));
    }

    #[test]
    fn test_translucent_luma_alpha_rejected() {
        let img = DynamicImage::ImageLumaA8(image::GrayAlphaImage::from_pixel(
            1,
            1,
            LumaA([10, 0]),
        ));
        assert!(matches!(
            ensure_rgb(&img),
            Err(SpinpoiError::UnsupportedColorMode(_))
        ));
    }

    #[test]
    fn test_sixteen_bit_rejected() {
        let img = DynamicImage::ImageRgb16(image::ImageBuffer::new(2, 2));
        assert!(matches!(
            ensure_rgb(&img),
            Err(SpinpoiError::UnsupportedColorMode(_))
        ));
    }
}
