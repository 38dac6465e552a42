//! # Error Types
//!
//! This module defines error types used throughout the spinpoi library.

use thiserror::Error;

/// Main error type for spinpoi operations
#[derive(Debug, Error)]
pub enum SpinpoiError {
    /// Zero-sized source image or zero target width into the resampler
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Zero width supplied to frame decoding
    #[error("Invalid frame width: {0}")]
    InvalidWidth(u32),

    /// Color mode that cannot be losslessly reduced to RGB
    #[error("Unsupported color mode: {0}")]
    UnsupportedColorMode(String),

    /// Decode/encode errors surfaced from the imaging backend
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
