//! Lookup texture generation.
//!
//! Fills an 8-bit RGB raster where each pixel encodes the Web Mercator tile
//! index of the geographic point that pixel represents under an
//! equirectangular pixel-to-lat/lon mapping.

use image::{Rgb, RgbImage};
use tracing::debug;

use super::error::TextureError;
use crate::coord::{to_tile_coords, CoordError, MAX_ZOOM};

/// Pixels whose latitude falls outside the Web Mercator range.
const OUT_OF_RANGE: Rgb<u8> = Rgb([0, 0, 0]);

/// Generates a tile-index lookup texture for one zoom level.
///
/// Each pixel (i, j) represents the geographic point
///
/// - latitude(j) = 90 − (j / height) × 180
/// - longitude(i) = (i / width) × 360 − 180
///
/// and stores the tile column in the red channel, the tile row in the green
/// channel, and zero in the blue channel. Pixels outside the valid Mercator
/// latitude range are pure black.
///
/// Tile indices are stored as `u8`, truncating above 255. At zoom levels up
/// to 8 every index fits; beyond that the encoding wraps, so callers that
/// need higher zooms must use a wider texture format.
///
/// # Errors
///
/// Returns `TextureError::InvalidDimensions` if either dimension is zero,
/// or `TextureError::Projection` if `zoom` exceeds the supported maximum.
pub fn generate(width: u32, height: u32, zoom: u8) -> Result<RgbImage, TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::InvalidDimensions {
            width,
            height,
            reason: "dimensions must be non-zero".to_string(),
        });
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::ZoomOutOfRange(zoom).into());
    }

    debug!(width, height, zoom, "Generating lookup texture");

    let mut texture = RgbImage::new(width, height);

    for j in 0..height {
        let lat = 90.0 - (j as f64 / height as f64) * 180.0;
        for i in 0..width {
            let lon = (i as f64 / width as f64) * 360.0 - 180.0;

            let pixel = match to_tile_coords(lat, lon, zoom) {
                Ok(tile) => Rgb([tile.col as u8, tile.row as u8, 0]),
                Err(CoordError::LatitudeOutOfRange(_)) => OUT_OF_RANGE,
                // Generated longitudes are always in [-180, 180) and zoom
                // was validated above, so anything else is a hard failure
                Err(e) => return Err(e.into()),
            };
            texture.put_pixel(i, j, pixel);
        }
    }

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_has_requested_dimensions() {
        for (w, h) in [(64, 64), (128, 32), (1, 1)] {
            let texture = generate(w, h, 4).unwrap();
            assert_eq!(texture.width(), w);
            assert_eq!(texture.height(), h);
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            generate(0, 64, 4),
            Err(TextureError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            generate(64, 0, 4),
            Err(TextureError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_zoom_above_maximum_rejected() {
        assert!(matches!(
            generate(64, 64, MAX_ZOOM + 1),
            Err(TextureError::Projection(CoordError::ZoomOutOfRange(_)))
        ));
    }

    #[test]
    fn test_out_of_range_latitudes_are_black() {
        let (w, h) = (64u32, 64u32);
        let texture = generate(w, h, 4).unwrap();

        for j in 0..h {
            let lat = 90.0 - (j as f64 / h as f64) * 180.0;
            let in_range = -85.0511 < lat && lat < 85.0511;
            for i in 0..w {
                if !in_range {
                    assert_eq!(
                        *texture.get_pixel(i, j),
                        Rgb([0, 0, 0]),
                        "Pixel ({}, {}) at lat {} should be black",
                        i,
                        j,
                        lat
                    );
                }
            }
        }

        // Sanity: the polar rows of a 64-pixel-high raster are out of range
        assert_eq!(*texture.get_pixel(32, 0), Rgb([0, 0, 0]));
        assert_eq!(*texture.get_pixel(32, 63), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_known_pixel_at_zoom_1() {
        // Pixel (48, 16) of a 64×64 raster is lat 45, lon 90: the eastern
        // column, northern row of the 2×2 grid
        let texture = generate(64, 64, 1).unwrap();
        assert_eq!(*texture.get_pixel(48, 16), Rgb([1, 0, 0]));
    }

    #[test]
    fn test_blue_channel_always_zero() {
        let texture = generate(64, 64, 6).unwrap();
        for pixel in texture.pixels() {
            assert_eq!(pixel.0[2], 0);
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let a = generate(128, 128, 5).unwrap();
        let b = generate(128, 128, 5).unwrap();
        assert_eq!(a.into_raw(), b.into_raw(), "Rasters should be byte-identical");
    }

    #[test]
    fn test_column_increases_eastward() {
        let texture = generate(256, 256, 4).unwrap();
        // Along the equatorial row, the red channel (tile column) must be
        // non-decreasing from west to east
        let j = 128;
        let mut last = 0u8;
        for i in 0..256 {
            let col = texture.get_pixel(i, j).0[0];
            assert!(
                col >= last,
                "Column decreased at pixel {}: {} < {}",
                i,
                col,
                last
            );
            last = col;
        }
        // And it must span the full range at zoom 4
        assert_eq!(texture.get_pixel(0, j).0[0], 0);
        assert_eq!(texture.get_pixel(255, j).0[0], 15);
    }
}
