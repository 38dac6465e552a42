//! # Spinpoi - POV-LED Image Pipeline
//!
//! Spinpoi converts raster photographs into the compact binary pixel
//! format consumed by spinning-LED poi firmware, and renders a preview of
//! how a strip image will look once spun. It provides:
//!
//! - **R3G3B2 codec**: the device's native 8-bit packed-color format
//! - **Transforms**: orientation, Lanczos resampling, brightness
//! - **Polar preview**: persistence-of-vision simulation on a 600×600 canvas
//! - **Batch compiler**: one `.bin` artifact per (image, poi size) pair
//!
//! ## Quick Start
//!
//! ```no_run
//! use spinpoi::{codec, render};
//!
//! // Compile one photo for a 72-LED poi
//! let img = image::open("photo.jpg")?;
//! let frame = codec::compress(&img, 72)?;
//! std::fs::write("photo.bin", &frame)?;
//!
//! // Render the spin preview
//! let canvas = render::render_preview(&img, 120)?;
//! canvas.save("preview.png").ok();
//!
//! # Ok::<(), spinpoi::SpinpoiError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codec`] | R3G3B2 frame encoding and decoding |
//! | [`transform`] | Orientation, resampling, brightness, RGB gate |
//! | [`render`] | Polar spin preview |
//! | [`batch`] | Batch frame compiler |
//! | [`poi`] | Poi hardware table and size catalog |
//! | [`error`] | Error types |
//!
//! ## Frame Format
//!
//! A compiled frame is a raw byte sequence, one R3G3B2 byte per pixel,
//! row-major over the rotated and resized image, with no header — the
//! firmware knows the width (its LED count) out of band. See [`codec`]
//! for the exact bit layout.

pub mod batch;
pub mod codec;
pub mod error;
pub mod poi;
pub mod render;
pub mod transform;

// Re-exports for convenience
pub use codec::BinaryFrame;
pub use error::SpinpoiError;
pub use poi::{PoiConfig, SizeCatalog};
