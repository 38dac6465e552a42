//! # Batch Frame Compiler
//!
//! Compiles every image in a source directory for every requested poi
//! size, writing one `.bin` artifact per (image, size) pair under the
//! bucket directory for that size:
//!
//! ```text
//! out/
//! ├── bin_36/
//! │   ├── aurora.bin
//! │   └── tiger.bin
//! ├── bin_60/
//! │   ├── aurora.bin
//! ...
//! ```
//!
//! Pairs are independent — distinct inputs, distinct output paths — so
//! they are encoded in parallel. A pair that fails (unreadable file,
//! unsupported color mode) is recorded and reported; the rest of the
//! batch keeps going. Re-running the compiler overwrites existing
//! artifacts in place.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::codec;
use crate::error::SpinpoiError;
use crate::poi::SizeCatalog;

/// Source-image extensions the compiler picks up.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// One successfully compiled (image, size) pair.
#[derive(Debug, Clone)]
pub struct CompiledFrame {
    /// Catalog name of the source image (file stem)
    pub name: String,
    /// LED count the frame was encoded for
    pub leds: u32,
    /// Where the artifact was written
    pub path: PathBuf,
    /// Frame length in bytes
    pub bytes: usize,
}

/// One failed (image, size) pair.
#[derive(Debug, Clone)]
pub struct FailedFrame {
    pub name: String,
    pub leds: u32,
    pub reason: String,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub compiled: Vec<CompiledFrame>,
    pub failed: Vec<FailedFrame>,
}

impl BatchReport {
    /// True when every pair compiled.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Compile every image in `images_dir` for every size in `sizes`.
///
/// Artifacts land in `out_dir/<bucket>/<stem>.bin`, overwriting previous
/// runs. Sizes outside [`SizeCatalog::SUPPORTED`] resolve to the generic
/// bucket; callers that want to reject them should do so before calling
/// (the CLI does).
///
/// Returns an error only when the batch cannot start at all — an
/// unreadable source directory or an uncreatable bucket directory.
/// Per-pair failures end up in the report instead.
pub fn compile_dir(
    images_dir: &Path,
    out_dir: &Path,
    sizes: &[u32],
) -> Result<BatchReport, SpinpoiError> {
    let images = list_images(images_dir)?;
    info!(
        images = images.len(),
        sizes = sizes.len(),
        "Starting batch compile"
    );

    // Bucket directories are created up front so the parallel writers
    // only ever touch existing paths.
    for &leds in sizes {
        fs::create_dir_all(out_dir.join(SizeCatalog::bucket(leds).dir_name()))?;
    }

    let pairs: Vec<(&PathBuf, u32)> = images
        .iter()
        .flat_map(|img| sizes.iter().map(move |&leds| (img, leds)))
        .collect();

    let results: Vec<Result<CompiledFrame, FailedFrame>> = pairs
        .par_iter()
        .map(|&(image_path, leds)| compile_pair(image_path, out_dir, leds))
        .collect();

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(frame) => report.compiled.push(frame),
            Err(failure) => {
                warn!(
                    name = failure.name.as_str(),
                    leds = failure.leds,
                    reason = failure.reason.as_str(),
                    "Pair failed to compile"
                );
                report.failed.push(failure);
            }
        }
    }

    info!(
        compiled = report.compiled.len(),
        failed = report.failed.len(),
        "Batch compile finished"
    );
    Ok(report)
}

/// Compile a single (image, size) pair to its artifact path.
fn compile_pair(image_path: &Path, out_dir: &Path, leds: u32) -> Result<CompiledFrame, FailedFrame> {
    let name = image_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let fail = |reason: String| FailedFrame {
        name: name.clone(),
        leds,
        reason,
    };

    let frame = codec::compress_file(image_path, leds).map_err(|e| fail(e.to_string()))?;

    let path = out_dir
        .join(SizeCatalog::bucket(leds).dir_name())
        .join(format!("{name}.bin"));
    fs::write(&path, &frame).map_err(|e| fail(e.to_string()))?;

    Ok(CompiledFrame {
        name,
        leds,
        path,
        bytes: frame.len(),
    })
}

/// List compilable images in a directory, sorted for stable run order.
fn list_images(dir: &Path) -> Result<Vec<PathBuf>, SpinpoiError> {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        })
        .collect();
    images.sort();
    Ok(images)
}

// ============================================================================
// TESTS
// ============================================================================
