//! Brightness classification and adjustment.
//!
//! The spun preview looks washed out for dark source photos, so the polar
//! renderer brightens anything that is not already predominantly bright.
//! Classification works on a 256-bucket luminance histogram: an image is
//! "bright" when more than [`BRIGHT_PIXEL_RATIO`] of its pixels have luma
//! at or above [`BRIGHT_LUMA_THRESHOLD`].
//!
//! The encode path never uses this stage; compiled frames keep the source
//! image's brightness.

use image::{Rgb, RgbImage, imageops};
use tracing::debug;

/// Luma value from which a pixel counts as bright.
pub const BRIGHT_LUMA_THRESHOLD: u8 = 200;

/// Fraction of bright pixels above which the whole image counts as bright.
pub const BRIGHT_PIXEL_RATIO: f32 = 0.4;

/// Brightness boost applied to non-bright images before preview rendering.
pub const ENHANCE_FACTOR: f32 = 1.5;

/// Build a 256-bucket luminance histogram of the image.
pub fn luma_histogram(img: &RgbImage) -> [u32; 256] {
    let mut histogram = [0u32; 256];
    for px in imageops::grayscale(img).pixels() {
        histogram[px[0] as usize] += 1;
    }
    histogram
}

/// Classify the image as predominantly bright at the default threshold
/// and ratio.
pub fn is_predominantly_bright(img: &RgbImage) -> bool {
    is_bright_with(img, BRIGHT_LUMA_THRESHOLD, BRIGHT_PIXEL_RATIO)
}

/// Classify with explicit threshold and ratio.
///
/// Returns `true` when the fraction of pixels with luma `>= threshold` is
/// strictly greater than `ratio`. An empty image is never bright.
pub fn is_bright_with(img: &RgbImage, threshold: u8, ratio: f32) -> bool {
    let total = img.width() as u64 * img.height() as u64;
    if total == 0 {
        return false;
    }

    let histogram = luma_histogram(img);
    let bright: u64 = histogram[threshold as usize..]
        .iter()
        .map(|&n| n as u64)
        .sum();

    let fraction = bright as f32 / total as f32;
    debug!(bright, total, fraction, "Classified image brightness");
    fraction > ratio
}

/// Scale per-pixel brightness by `factor`, clamping each channel to 255.
///
/// `factor` 1.0 is the identity; values above 1 brighten, below 1 darken.
pub fn enhance_brightness(img: &RgbImage, factor: f32) -> RgbImage {
    let mut out = RgbImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        *dst = Rgb(src.0.map(|c| (c as f32 * factor).round().min(255.0) as u8));
    }
    out
}
