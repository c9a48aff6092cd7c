//! Batch configuration.
//!
//! All batch parameters live in a small configuration struct; the defaults
//! produce the standard set of textures consumed by the renderer.

use std::path::PathBuf;

use thiserror::Error;

use crate::coord::MAX_ZOOM;

/// Default texture width and height in pixels.
pub const DEFAULT_TEXTURE_SIZE: u32 = 1024;

/// Default first zoom level to generate.
pub const DEFAULT_MIN_ZOOM: u8 = 4;

/// Default last zoom level to generate (inclusive).
///
/// Zoom 8 is the highest level whose tile indices (0–255) fit an 8-bit
/// channel without wrapping.
pub const DEFAULT_MAX_ZOOM: u8 = 8;

/// Default output directory for generated textures.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Configuration for a lookup texture batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LutConfig {
    /// Raster width in pixels.
    pub width: u32,

    /// Raster height in pixels.
    pub height: u32,

    /// First zoom level to generate.
    pub min_zoom: u8,

    /// Last zoom level to generate (inclusive).
    pub max_zoom: u8,

    /// Directory the textures are written into (created if missing).
    pub output_dir: PathBuf,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TEXTURE_SIZE,
            height: DEFAULT_TEXTURE_SIZE,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl LutConfig {
    /// Set the raster dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the zoom range (inclusive on both ends).
    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Number of zoom levels this configuration covers.
    pub fn zoom_count(&self) -> u8 {
        if self.max_zoom < self.min_zoom {
            0
        } else {
            self.max_zoom - self.min_zoom + 1
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if self.max_zoom > MAX_ZOOM {
            return Err(ConfigError::ZoomTooHigh(self.max_zoom));
        }
        Ok(())
    }
}

/// Errors produced by [`LutConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    #[error("texture dimensions {width}×{height} must be non-zero")]
    ZeroDimensions { width: u32, height: u32 },

    /// min_zoom exceeds max_zoom.
    #[error("zoom range is inverted: min {min} > max {max}")]
    InvalidZoomRange { min: u8, max: u8 },

    /// max_zoom exceeds the supported maximum.
    #[error("zoom level {0} exceeds the maximum of {MAX_ZOOM}")]
    ZoomTooHigh(u8),
}
