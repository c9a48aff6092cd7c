//! TileLut - precomputed Web Mercator tile-index lookup textures
//!
//! This library generates lookup textures that encode, per pixel, the Web
//! Mercator tile index covering that pixel's latitude/longitude at a given
//! zoom level. A renderer samples these textures to decide which map tile
//! covers a point on an equirectangular globe texture without doing the
//! projection math per frame.
//!
//! The tile column is stored in the red channel, the tile row in the green
//! channel, and the blue channel is always zero. Pixels whose latitude falls
//! outside the Web Mercator projection range are written as pure black.

pub mod batch;
pub mod config;
pub mod coord;
pub mod logging;
pub mod texture;

/// Crate version, reported by the CLI banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
