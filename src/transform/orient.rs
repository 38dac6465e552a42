//! 90° orientation transforms.
//!
//! The LED strip is mounted along what the source photograph considers its
//! horizontal axis, so images are rotated a quarter turn before encoding
//! and rotated back after decoding. Both rotations are lossless and swap
//! width and height.

use image::{RgbImage, imageops};
use tracing::debug;

/// Rotate an image 90 degrees clockwise.
pub fn rotate_clockwise(img: &RgbImage) -> RgbImage {
    let (w, h) = img.dimensions();
    debug!(w, h, "Rotating image 90 degrees clockwise");
    imageops::rotate90(img)
}

/// Rotate an image 90 degrees counter-clockwise.
///
/// Exact inverse of [`rotate_clockwise`]: applying both in either order
/// reproduces the original image bit for bit.
pub fn rotate_counterclockwise(img: &RgbImage) -> RgbImage {
    let (w, h) = img.dimensions();
    debug!(w, h, "Rotating image 90 degrees counter-clockwise");
    imageops::rotate270(img)
}
