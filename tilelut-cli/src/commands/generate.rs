//! Generate command - write lookup textures for a zoom range.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use tilelut::batch;
use tilelut::config::{LutConfig, DEFAULT_MAX_ZOOM};

use crate::error::CliError;

/// Arguments for the generate command.
pub struct GenerateArgs {
    pub output_dir: PathBuf,
    pub size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    // Tile indices are stored in 8-bit channels; above zoom 8 they exceed
    // 255 and would wrap silently, so refuse the range outright.
    if args.max_zoom > DEFAULT_MAX_ZOOM {
        return Err(CliError::Usage(format!(
            "--max-zoom {} exceeds {}: tile indices above zoom {} do not \
             fit the texture's 8-bit channels",
            args.max_zoom, DEFAULT_MAX_ZOOM, DEFAULT_MAX_ZOOM
        )));
    }

    let config = LutConfig::default()
        .with_size(args.size, args.size)
        .with_zoom_range(args.min_zoom, args.max_zoom)
        .with_output_dir(args.output_dir);
    config.validate()?;

    println!("TileLut v{}", tilelut::VERSION);
    println!();
    println!("Texture size: {}×{}", config.width, config.height);
    println!("Zoom levels:  {}–{}", config.min_zoom, config.max_zoom);
    println!("Output:       {}", config.output_dir.display());
    println!();

    let bar = ProgressBar::new(config.zoom_count() as u64);
    bar.set_style(ProgressStyle::default_bar().progress_chars("#>-"));

    for zoom in config.min_zoom..=config.max_zoom {
        bar.set_message(format!("zoom {}", zoom));
        let path = batch::write_texture(&config, zoom)?;
        debug!(zoom, path = %path.display(), "Texture complete");
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "Wrote {} texture(s) to {}",
        config.zoom_count(),
        config.output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_all_textures() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            output_dir: dir.path().to_path_buf(),
            size: 8,
            min_zoom: 1,
            max_zoom: 2,
        };

        run(args).unwrap();

        assert!(dir.path().join("mercator_texture_zoom_1.png").exists());
        assert!(dir.path().join("mercator_texture_zoom_2.png").exists());
    }

    #[test]
    fn test_run_rejects_zoom_above_8bit_range() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            output_dir: dir.path().to_path_buf(),
            size: 8,
            min_zoom: 4,
            max_zoom: 9,
        };

        let result = run(args);
        assert!(matches!(result, Err(CliError::Usage(_))));
    }

    #[test]
    fn test_run_rejects_inverted_zoom_range() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            output_dir: dir.path().to_path_buf(),
            size: 8,
            min_zoom: 5,
            max_zoom: 2,
        };

        let result = run(args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_run_rejects_zero_size() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            output_dir: dir.path().to_path_buf(),
            size: 0,
            min_zoom: 4,
            max_zoom: 5,
        };

        let result = run(args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
