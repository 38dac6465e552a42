//! # R3G3B2 Frame Codec
//!
//! This module implements the poi's native pixel format: one byte per
//! pixel, 3 bits red, 3 bits green, 2 bits blue. The firmware streams
//! these bytes straight to the LED strip, so the layout is frozen —
//! changing it invalidates every `.bin` already on a device.
//!
//! ## Bit Layout
//!
//! ```text
//!   bit   7   6   5   4   3   2   1   0
//!       ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!       │ R7│ R6│ R5│ G7│ G6│ G5│ B7│ B6│
//!       └───┴───┴───┴───┴───┴───┴───┴───┘
//! ```
//!
//! Encoding keeps the top bits of each channel:
//!
//! ```text
//! byte = (R & 0xE0) | ((G & 0xE0) >> 3) | (B >> 6)
//! ```
//!
//! Decoding restores the top bits and leaves the low bits **zero** — there
//! is deliberately no bit replication to refill the dynamic range:
//!
//! ```text
//! R' = byte & 0xE0          (0, 32, 64, ... 224)
//! G' = (byte & 0x1C) << 3
//! B' = (byte & 0x03) << 6   (0, 64, 128, 192)
//! ```
//!
//! Existing decoders rely on those exact values, so the asymmetry is part
//! of the format, not a defect to fix.
//!
//! ## Frame Layout
//!
//! A frame is raw bytes in row-major order of the rotated, resized image —
//! no header, no length prefix, no embedded width. The consumer must know
//! the encoding width (the LED count) out of band; decoding derives the
//! height as `ceil(len / width)`.
//!
//! ## Device Pipeline
//!
//! [`compress`] runs the full encode path the firmware expects:
//! RGB normalization → 90° clockwise rotation (strip mounting) → Lanczos
//! resize to the LED count → byte packing. [`decode_for_preview`] is the
//! viewing inverse: unpack, then rotate counter-clockwise back to display
//! orientation.
//!
//! ## Example
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use spinpoi::codec;
//!
//! let img = RgbImage::from_pixel(4, 2, Rgb([255, 0, 0]));
//! let frame = codec::encode_rgb(&img);
//! assert_eq!(frame.len(), 8);
//! assert!(frame.iter().all(|&b| b == 0xE0));
//! ```

use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::error::SpinpoiError;
use crate::transform::{ensure_rgb, resize_to_width, rotate_clockwise, rotate_counterclockwise};

/// A raw, header-less packed-color byte sequence, one byte per pixel.
pub type BinaryFrame = Vec<u8>;

/// Pack one RGB triple into a single R3G3B2 byte.
#[inline]
pub fn pack_pixel(r: u8, g: u8, b: u8) -> u8 {
    (r & 0xE0) | ((g & 0xE0) >> 3) | (b >> 6)
}

/// Unpack one R3G3B2 byte back into an RGB triple.
///
/// Low bits stay zero; see the module docs for why.
#[inline]
pub fn unpack_pixel(byte: u8) -> Rgb<u8> {
    Rgb([byte & 0xE0, (byte & 0x1C) << 3, (byte & 0x03) << 6])
}

/// Encode an RGB image into a frame, row-major.
///
/// Frame length is always `width * height`. The image must already be in
/// its device orientation and size; use [`compress`] for the full pipeline.
pub fn encode_rgb(img: &RgbImage) -> BinaryFrame {
    let (w, h) = img.dimensions();
    let mut frame = Vec::with_capacity(w as usize * h as usize);
    for y in 0..h {
        for x in 0..w {
            let px = img.get_pixel(x, y);
            frame.push(pack_pixel(px[0], px[1], px[2]));
        }
    }
    debug!(w, h, bytes = frame.len(), "Encoded frame");
    frame
}

/// Encode a decoded image, normalizing its color mode first.
///
/// Fails with [`SpinpoiError::UnsupportedColorMode`] if the image cannot
/// be losslessly reduced to RGB (e.g. it carries transparency).
pub fn encode(img: &DynamicImage) -> Result<BinaryFrame, SpinpoiError> {
    Ok(encode_rgb(&ensure_rgb(img)?))
}

/// Decode a frame into a row-major RGB image of the given width.
///
/// The height is `ceil(len / width)`; when the frame does not fill the
/// last row, the remaining pixels stay black. Fails with
/// [`SpinpoiError::InvalidWidth`] if `width` is zero.
pub fn decode(frame: &[u8], width: u32) -> Result<RgbImage, SpinpoiError> {
    if width == 0 {
        return Err(SpinpoiError::InvalidWidth(width));
    }

    let height = (frame.len() as u32).div_ceil(width).max(1);
    let mut img = RgbImage::new(width, height);
    for (i, &byte) in frame.iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        img.put_pixel(x, y, unpack_pixel(byte));
    }
    debug!(width, height, bytes = frame.len(), "Decoded frame");
    Ok(img)
}

/// Decode a frame and rotate it back to display orientation.
///
/// Inverse of the [`compress`] orientation step: the stored frame is in
/// strip orientation, so viewing it requires the counter-clockwise
/// unrotation.
pub fn decode_for_preview(frame: &[u8], width: u32) -> Result<RgbImage, SpinpoiError> {
    Ok(rotate_counterclockwise(&decode(frame, width)?))
}

/// Run the full device encode pipeline for a poi with `leds` LEDs.
///
/// Normalizes to RGB, rotates 90° clockwise so the image's visual width
/// runs along the strip's temporal axis, resizes to `leds` wide with the
/// proportional height, and packs the result.
pub fn compress(img: &DynamicImage, leds: u32) -> Result<BinaryFrame, SpinpoiError> {
    let rgb = ensure_rgb(img)?;
    let rotated = rotate_clockwise(&rgb);
    let resized = resize_to_width(&rotated, leds)?;
    Ok(encode_rgb(&resized))
}

/// [`compress`] over an image file on disk.
pub fn compress_file(path: &Path, leds: u32) -> Result<BinaryFrame, SpinpoiError> {
    let img = image::open(path)?;
    compress(&img, leds)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_primary_colors() {
        assert_eq!(pack_pixel(255, 0, 0), 0xE0);
        assert_eq!(pack_pixel(0, 255, 0), 0x1C);
        assert_eq!(pack_pixel(0, 0, 255), 0x03);
        assert_eq!(pack_pixel(255, 255, 255), 0xFF);
        assert_eq!(pack_pixel(0, 0, 0), 0x00);
    }

    #[test]
    fn test_unpack_vectors() {
        assert_eq!(unpack_pixel(0xE0), Rgb([0xE0, 0x00, 0x00]));
        assert_eq!(unpack_pixel(0x1C), Rgb([0x00, 0xE0, 0x00]));
        assert_eq!(unpack_pixel(0x03), Rgb([0x00, 0x00, 0xC0]));
        assert_eq!(unpack_pixel(0xFF), Rgb([0xE0, 0xE0, 0xC0]));
    }

    #[test]
    fn test_unpack_keeps_low_bits_zero() {
        for byte in 0..=u8::MAX {
            let Rgb([r, g, b]) = unpack_pixel(byte);
            assert_eq!(r & 0x1F, 0);
            assert_eq!(g & 0x1F, 0);
            assert_eq!(b & 0x3F, 0);
        }
    }

    #[test]
    fn test_frame_length_is_width_times_height() {
        let img = RgbImage::new(13, 7);
        assert_eq!(encode_rgb(&img).len(), 13 * 7);
    }

    #[test]
    fn test_encode_is_row_major() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        img.put_pixel(1, 1, Rgb([255, 255, 255]));
        assert_eq!(encode_rgb(&img), vec![0xE0, 0x1C, 0x03, 0xFF]);
    }

    #[test]
    fn test_decode_derives_height_with_partial_row() {
        // 5 bytes at width 2 -> ceil(5/2) = 3 rows, last pixel black.
        let img = decode(&[0xFF; 5], 2).unwrap();
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.get_pixel(1, 2), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(0, 2), &Rgb([0xE0, 0xE0, 0xC0]));
    }

    #[test]
    fn test_decode_zero_width_errors() {
        assert!(matches!(
            decode(&[0xE0], 0),
            Err(SpinpoiError::InvalidWidth(0))
        ));
    }

    #[test]
    fn test_encode_decode_round_trip_quantizes() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([200, 100, 50]));
        img.put_pixel(1, 0, Rgb([31, 31, 63]));
        img.put_pixel(2, 0, Rgb([224, 224, 192]));

        let decoded = decode(&encode_rgb(&img), 3).unwrap();
        // Quantization zeroes everything below the kept bits.
        assert_eq!(decoded.get_pixel(0, 0), &Rgb([192, 96, 0]));
        assert_eq!(decoded.get_pixel(1, 0), &Rgb([0, 0, 0]));
        // Values already on the grid survive exactly.
        assert_eq!(decoded.get_pixel(2, 0), &Rgb([224, 224, 192]));
    }

    #[test]
    fn test_encode_rejects_transparency() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([1, 2, 3, 100]),
        ));
        assert!(matches!(
            encode(&img),
            Err(SpinpoiError::UnsupportedColorMode(_))
        ));
    }

    #[test]
    fn test_compress_length_tracks_rotated_resize() {
        // 100x40 source -> rotated 40x100 -> resized 36x90 -> 3240 bytes.
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 40, Rgb([0, 0, 0])));
        let frame = compress(&img, 36).unwrap();
        assert_eq!(frame.len(), 36 * 90);
    }

    #[test]
    fn test_decode_for_preview_unrotates() {
        // Strip-oriented 2x3 frame comes back as 3x2 for display.
        let frame = vec![0u8; 6];
        let img = decode_for_preview(&frame, 2).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
    }
}
