//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and Web Mercator tile coordinates as used by slippy-map tile services.

mod types;

pub use types::{CoordError, TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM};

use std::f64::consts::PI;

/// Converts geographic coordinates to tile coordinates.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees, strictly inside (-85.0511, 85.0511)
/// * `lon` - Longitude in degrees, in [-180.0, 180.0)
/// * `zoom` - Zoom level (0 to 18)
///
/// # Returns
///
/// A `Result` containing the tile coordinates or an error if inputs are
/// outside the projection's valid range. Latitudes at or beyond the
/// Mercator limit are rejected before any trigonometric evaluation, so the
/// logarithm never sees a non-positive argument.
#[inline]
pub fn to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoord, CoordError> {
    // Validate inputs
    if !(MIN_LAT < lat && lat < MAX_LAT) {
        return Err(CoordError::LatitudeOutOfRange(lat));
    }
    if !(MIN_LON..MAX_LON).contains(&lon) {
        return Err(CoordError::LongitudeOutOfRange(lon));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::ZoomOutOfRange(zoom));
    }

    // Number of tiles along each axis at this zoom level
    let n = 2.0_f64.powi(zoom as i32);

    // Convert longitude to tile column
    let col = ((lon + 180.0) / 360.0 * n) as u32;

    // Convert latitude to tile row using the Web Mercator projection:
    // row = floor((1 - ln(tan(lat) + sec(lat)) / pi) / 2 * n)
    let lat_rad = lat.to_radians();
    let row = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n) as u32;

    Ok(TileCoord { col, row, zoom })
}

/// Converts tile coordinates back to geographic coordinates.
///
/// Returns the latitude/longitude of the tile's northwest corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileCoord) -> (f64, f64) {
    let n = 2.0_f64.powi(tile.zoom as i32);

    let lon = tile.col as f64 / n * 360.0 - 180.0;

    // Inverse Web Mercator for the row
    let y = tile.row as f64 / n;
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    let lat = lat_rad.to_degrees();

    (lat, lon)
}
