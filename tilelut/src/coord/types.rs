//! Types and constants for coordinate conversion.

use std::fmt;

use thiserror::Error;

/// Northern latitude limit of the Web Mercator projection, in degrees.
///
/// Latitudes at or beyond this value have no tile coordinate; the projection
/// is asymptotic towards the poles.
pub const MAX_LAT: f64 = 85.0511;

/// Southern latitude limit of the Web Mercator projection, in degrees.
pub const MIN_LAT: f64 = -85.0511;

/// Western longitude limit, in degrees.
pub const MIN_LON: f64 = -180.0;

/// Eastern longitude limit, in degrees (exclusive).
pub const MAX_LON: f64 = 180.0;

/// Lowest supported zoom level (a single tile covering the globe).
pub const MIN_ZOOM: u8 = 0;

/// Highest supported zoom level.
pub const MAX_ZOOM: u8 = 18;

/// Web Mercator tile coordinates at a given zoom level.
///
/// `col` and `row` identify a tile within the 2^zoom × 2^zoom grid,
/// with (0, 0) at the northwest corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Tile column (x), increasing eastward.
    pub col: u32,
    /// Tile row (y), increasing southward.
    pub row: u32,
    /// Zoom level.
    pub zoom: u8,
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.col, self.row)
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude at or beyond the Web Mercator projection limit.
    #[error("latitude {0} is outside the Web Mercator range (±{MAX_LAT})")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180).
    #[error("longitude {0} is outside the valid range [{MIN_LON}, {MAX_LON})")]
    LongitudeOutOfRange(f64),

    /// Zoom level above the supported maximum.
    #[error("zoom level {0} exceeds the maximum of {MAX_ZOOM}")]
    ZoomOutOfRange(u8),
}
