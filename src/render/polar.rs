//! # Polar Spin Preview
//!
//! Simulates the persistence-of-vision pattern a spun poi produces from a
//! flat strip image. The strip is swept around the canvas center in
//! [`ANGULAR_STEP`]-degree sectors; each strip pixel `(x, y)` lands at
//!
//! ```text
//! adjacent = (x + 90) * sin(radians(-y + a))
//! opposite = (x + 90) * cos(radians(-y + a))
//! canvas   = (round(adjacent) + 300, round(opposite) + 300)
//! ```
//!
//! for every angular offset `a` in `{0, 120, 240}`. The `x + 90` term is
//! the dead radius of the handle and tether: the innermost LED sits 90
//! canvas pixels from the center.
//!
//! This is a forward scatter, not a resampling: several strip pixels may
//! hit the same canvas pixel (the last write in sweep order wins) and
//! canvas pixels nothing hits stay black. Sweep order is fixed — ascending
//! offset, then row-major — so two runs over the same input produce
//! byte-identical canvases.
//!
//! Strips wider than the canvas half-extent minus the dead radius would
//! land outside the canvas; those writes are dropped.

use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::error::SpinpoiError;
use crate::transform::{
    brightness::ENHANCE_FACTOR, enhance_brightness, ensure_rgb, is_predominantly_bright,
    resize_to_height, resize_to_width, rotate_clockwise,
};

/// Preview canvas edge length in pixels.
pub const CANVAS_SIZE: u32 = 600;

/// Angular step of the sweep, in degrees. Also the strip height the
/// source is squeezed to, so that consecutive sectors tile the full turn.
pub const ANGULAR_STEP: u32 = 360 / FIT;

/// Sector divisor. The hardware sweep always uses 3.
const FIT: u32 = 3;

/// Distance from the canvas center to the innermost LED, in pixels.
const DEAD_RADIUS: f64 = 90.0;

/// Render the spin preview of a source photograph.
///
/// The image is brightened by [`ENHANCE_FACTOR`] unless it is already
/// predominantly bright, rotated into strip orientation, resized to
/// `base_width` columns and [`ANGULAR_STEP`] rows, then swept onto a
/// black [`CANVAS_SIZE`]² canvas.
///
/// Fails with [`SpinpoiError::UnsupportedColorMode`] on images that do not
/// reduce to RGB and [`SpinpoiError::InvalidDimension`] on a zero
/// `base_width` or an empty source.
pub fn render_preview(img: &DynamicImage, base_width: u32) -> Result<RgbImage, SpinpoiError> {
    let rgb = ensure_rgb(img)?;

    let rgb = if is_predominantly_bright(&rgb) {
        rgb
    } else {
        debug!("Image is not bright, boosting before render");
        enhance_brightness(&rgb, ENHANCE_FACTOR)
    };

    let rotated = rotate_clockwise(&rgb);
    let strip = resize_to_width(&rotated, base_width)?;
    let strip = resize_to_height(&strip, ANGULAR_STEP)?;

    Ok(sweep(&strip))
}

/// Scatter a prepared strip onto the canvas, one sector per angular offset.
fn sweep(strip: &RgbImage) -> RgbImage {
    let mut canvas = RgbImage::new(CANVAS_SIZE, CANVAS_SIZE);
    let center = (CANVAS_SIZE / 2) as i64;
    let (w, h) = strip.dimensions();

    let mut offset = 0u32;
    while offset < 360 {
        for y in 0..h {
            for x in 0..w {
                let angle = (f64::from(offset) - f64::from(y)).to_radians();
                let radius = f64::from(x) + DEAD_RADIUS;
                let cx = (radius * angle.sin()).round() as i64 + center;
                let cy = (radius * angle.cos()).round() as i64 + center;
                if (0..i64::from(CANVAS_SIZE)).contains(&cx)
                    && (0..i64::from(CANVAS_SIZE)).contains(&cy)
                {
                    canvas.put_pixel(cx as u32, cy as u32, *strip.get_pixel(x, y));
                }
            }
        }
        offset += ANGULAR_STEP;
    }

    debug!(w, h, "Finished spin sweep");
    canvas
}

// ============================================================================
// TESTS
// ============================================================================
