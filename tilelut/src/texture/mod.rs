//! Tile-index lookup texture generation.
//!
//! A lookup texture is an 8-bit RGB raster where each pixel encodes the Web
//! Mercator tile index covering that pixel's geographic position: tile
//! column in the red channel, tile row in the green channel, blue unused.
//! Pixels whose latitude falls outside the projection's valid range are
//! written as pure black.

mod error;
mod lut;

pub use error::TextureError;
pub use lut::generate;
