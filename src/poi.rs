//! # Poi Hardware Configuration
//!
//! This module defines the hardware specifications for supported POV-LED
//! poi and the mapping from LED count to firmware storage bucket.
//!
//! ## Supported Poi Sizes
//!
//! | LED count | Bucket directory |
//! |-----------|------------------|
//! | 36        | `bin_36`         |
//! | 60        | `bin_60`         |
//! | 72        | `bin_72`         |
//! | 120       | `bin_120`        |
//! | 144       | `bin_144`        |
//!
//! Any LED count outside this table resolves to the generic bucket
//! (`bin_generic`). Whether a caller accepts the generic bucket or rejects
//! unsupported sizes outright is decided at the call site; the CLI `compile`
//! command rejects them before doing any work.
//!
//! ## Usage
//!
//! ```
//! use spinpoi::poi::{Bucket, PoiConfig, SizeCatalog};
//!
//! let config = PoiConfig::LEDS_72;
//! assert_eq!(config.leds, 72);
//!
//! assert_eq!(SizeCatalog::bucket(72), Bucket::Sized(72));
//! assert_eq!(SizeCatalog::bucket(100), Bucket::Generic);
//! ```

/// Hardware characteristics of one poi model.
///
/// The LED count is the strip length in pixels and therefore the encoding
/// width of every frame compiled for the device: one byte per LED per
/// angular column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoiConfig {
    /// Human-readable model name
    pub name: &'static str,

    /// Number of LEDs on the strip (frame encoding width)
    pub leds: u32,
}

impl PoiConfig {
    /// 36-LED short poi
    pub const LEDS_36: Self = Self {
        name: "Poi 36",
        leds: 36,
    };

    /// 60-LED poi
    pub const LEDS_60: Self = Self {
        name: "Poi 60",
        leds: 60,
    };

    /// 72-LED poi
    pub const LEDS_72: Self = Self {
        name: "Poi 72",
        leds: 72,
    };

    /// 120-LED long poi
    pub const LEDS_120: Self = Self {
        name: "Poi 120",
        leds: 120,
    };

    /// 144-LED high-density poi (144 LEDs/m strip)
    pub const LEDS_144: Self = Self {
        name: "Poi 144",
        leds: 144,
    };

    /// List all built-in poi configurations, in ascending LED count.
    pub fn built_in() -> [Self; 5] {
        [
            Self::LEDS_36,
            Self::LEDS_60,
            Self::LEDS_72,
            Self::LEDS_120,
            Self::LEDS_144,
        ]
    }

    /// Look up a built-in configuration by LED count.
    pub fn for_leds(leds: u32) -> Option<Self> {
        Self::built_in().into_iter().find(|c| c.leds == leds)
    }
}

impl Default for PoiConfig {
    fn default() -> Self {
        Self::LEDS_72
    }
}

// ============================================================================
// SIZE CATALOG
// ============================================================================

/// Storage bucket a compiled frame is filed under on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// One of the supported LED counts; artifacts go to `bin_<leds>`.
    Sized(u32),
    /// Fallback for unlisted LED counts; artifacts go to `bin_generic`.
    Generic,
}

impl Bucket {
    /// Directory name for this bucket inside the artifact root.
    pub fn dir_name(&self) -> String {
        match self {
            Self::Sized(leds) => format!("bin_{leds}"),
            Self::Generic => "bin_generic".to_string(),
        }
    }
}

/// The fixed LED-count → bucket table.
///
/// This is an explicit enumeration, not a default-valued map: every
/// supported size is listed in [`SizeCatalog::SUPPORTED`], and everything
/// else is visibly [`Bucket::Generic`].
#[derive(Debug)]
pub struct SizeCatalog;

impl SizeCatalog {
    /// LED counts with a dedicated firmware bucket.
    pub const SUPPORTED: [u32; 5] = [36, 60, 72, 120, 144];

    /// Whether the LED count has a dedicated bucket.
    pub fn is_supported(leds: u32) -> bool {
        PoiConfig::for_leds(leds).is_some()
    }

    /// Resolve an LED count to its storage bucket.
    pub fn bucket(leds: u32) -> Bucket {
        if Self::is_supported(leds) {
            Bucket::Sized(leds)
        } else {
            Bucket::Generic
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
