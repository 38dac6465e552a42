//! # Image Transforms
//!
//! Pure transforms over owned raster buffers, applied ahead of the codec
//! and the polar renderer. Each function takes a reference and returns a
//! new owned image; nothing here performs I/O.
//!
//! ## Modules
//!
//! - [`orient`]: lossless 90° rotations matching the strip mounting
//! - [`resize`]: aspect-preserving Lanczos resampling
//! - [`brightness`]: bright-image classification and brightness boost
//! - [`color`]: normalization of decoded images to plain RGB

pub mod brightness;
pub mod color;
pub mod orient;
pub mod resize;

pub use brightness::{enhance_brightness, is_predominantly_bright};
pub use color::ensure_rgb;
pub use orient::{rotate_clockwise, rotate_counterclockwise};
pub use resize::{resize_to_height, resize_to_width};
