//! Batch driver writing one lookup texture per zoom level.
//!
//! The batch is strictly sequential and fail-fast: the first generation or
//! write error aborts the run, leaving any already-written textures in
//! place.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::LutConfig;
use crate::texture::{self, TextureError};

/// File name for the lookup texture at a given zoom level.
pub fn texture_filename(zoom: u8) -> String {
    format!("mercator_texture_zoom_{}.png", zoom)
}

/// Generate and write the lookup texture for a single zoom level.
///
/// Creates the output directory if it does not exist yet, then writes
/// `mercator_texture_zoom_{zoom}.png` into it.
///
/// # Returns
///
/// The path of the written file.
pub fn write_texture(config: &LutConfig, zoom: u8) -> Result<PathBuf, TextureError> {
    fs::create_dir_all(&config.output_dir)?;

    let raster = texture::generate(config.width, config.height, zoom)?;
    let path = config.output_dir.join(texture_filename(zoom));
    raster.save(&path)?;

    info!(
        zoom,
        width = config.width,
        height = config.height,
        path = %path.display(),
        "Lookup texture written"
    );

    Ok(path)
}

/// Generate and write lookup textures for every zoom level in the
/// configured range.
///
/// # Returns
///
/// The paths of the written files, in ascending zoom order.
pub fn write_textures(config: &LutConfig) -> Result<Vec<PathBuf>, TextureError> {
    let mut paths = Vec::with_capacity(config.zoom_count() as usize);

    for zoom in config.min_zoom..=config.max_zoom {
        paths.push(write_texture(config, zoom)?);
    }

    info!(count = paths.len(), "Lookup texture batch complete");
    Ok(paths)
}
