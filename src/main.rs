//! # Spinpoi CLI
//!
//! Command-line interface for compiling and previewing poi frames.
//!
//! ## Usage
//!
//! ```bash
//! # Compile every image in a directory for all supported poi sizes
//! spinpoi compile --images static/images --out static/bins
//!
//! # Compile for one size only
//! spinpoi compile --images static/images --out static/bins --size 36
//!
//! # Render a spin preview PNG
//! spinpoi preview photo.jpg --output preview.png
//!
//! # Compile a single image to a raw frame
//! spinpoi encode photo.jpg --size 72 --output photo.bin
//!
//! # Turn a frame back into a viewable PNG (width must match encoding)
//! spinpoi decode photo.bin --width 72 --output photo.png
//! ```

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spinpoi::{SpinpoiError, batch, codec, poi::SizeCatalog, render};

/// Spinpoi - POV-LED frame compiler and previewer
#[derive(Parser, Debug)]
#[command(name = "spinpoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a directory of images into per-size frame artifacts
    Compile {
        /// Directory of source images (jpg/jpeg/png)
        #[arg(long)]
        images: PathBuf,

        /// Artifact output directory (bucket subdirectories are created)
        #[arg(long)]
        out: PathBuf,

        /// Poi size(s) to compile for; defaults to all supported sizes
        #[arg(long = "size")]
        sizes: Vec<u32>,
    },

    /// Render the spin preview of one image to a PNG
    Preview {
        /// Source image
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Strip base width in pixels
        #[arg(long, default_value = "120")]
        width: u32,
    },

    /// Encode one image into a raw frame
    Encode {
        /// Source image
        input: PathBuf,

        /// Poi LED count (frame width)
        #[arg(long)]
        size: u32,

        /// Output .bin path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Decode a raw frame back into a viewable PNG
    Decode {
        /// Frame file
        input: PathBuf,

        /// Width the frame was encoded at
        #[arg(long)]
        width: u32,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SpinpoiError> {
    match cli.command {
        Commands::Compile { images, out, sizes } => {
            let sizes = if sizes.is_empty() {
                SizeCatalog::SUPPORTED.to_vec()
            } else {
                // Fail fast on sizes the firmware has no bucket for.
                if let Some(&bad) = sizes.iter().find(|&&s| !SizeCatalog::is_supported(s)) {
                    return Err(SpinpoiError::InvalidDimension(format!(
                        "unsupported poi size {bad} (supported: {:?})",
                        SizeCatalog::SUPPORTED
                    )));
                }
                sizes
            };

            let report = batch::compile_dir(&images, &out, &sizes)?;
            println!(
                "Compiled {} frame(s), {} failure(s)",
                report.compiled.len(),
                report.failed.len()
            );
            for failure in &report.failed {
                eprintln!(
                    "  failed: {} @ {} LEDs: {}",
                    failure.name, failure.leds, failure.reason
                );
            }
            if !report.is_clean() {
                process::exit(1);
            }
            Ok(())
        }

        Commands::Preview {
            input,
            output,
            width,
        } => {
            let img = image::open(&input)?;
            let canvas = render::render_preview(&img, width)?;
            canvas.save(&output)?;
            println!("Wrote preview to {}", output.display());
            Ok(())
        }

        Commands::Encode {
            input,
            size,
            output,
        } => {
            let frame = codec::compress_file(&input, size)?;
            fs::write(&output, &frame)?;
            println!("Wrote {} byte frame to {}", frame.len(), output.display());
            Ok(())
        }

        Commands::Decode {
            input,
            width,
            output,
        } => {
            let frame = fs::read(&input)?;
            let img = codec::decode_for_preview(&frame, width)?;
            img.save(&output)?;
            println!(
                "Decoded {}x{} image to {}",
                img.width(),
                img.height(),
                output.display()
            );
            Ok(())
        }
    }
}
