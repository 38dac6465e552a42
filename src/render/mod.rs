//! # Preview Rendering
//!
//! Visual simulation of the spinning device.
//!
//! ## Modules
//!
//! - [`polar`]: persistence-of-vision preview on a 600×600 canvas

pub mod polar;

pub use polar::render_preview;
