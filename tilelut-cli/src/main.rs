//! TileLut CLI - precompute Web Mercator tile-index lookup textures.
//!
//! Defaults reproduce the fixed parameters of the batch: 1024×1024
//! textures for zoom levels 4 through 8, written into `public/`.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use commands::generate::{self, GenerateArgs};
use tilelut::config::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_OUTPUT_DIR, DEFAULT_TEXTURE_SIZE,
};

#[derive(Parser, Debug)]
#[command(
    name = "tilelut",
    version,
    about = "Precompute Web Mercator tile-index lookup textures"
)]
struct Cli {
    /// Directory the textures are written into
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Texture width and height in pixels
    #[arg(long, default_value_t = DEFAULT_TEXTURE_SIZE)]
    size: u32,

    /// First zoom level to generate
    #[arg(long, default_value_t = DEFAULT_MIN_ZOOM)]
    min_zoom: u8,

    /// Last zoom level to generate (inclusive, at most 8)
    #[arg(long, default_value_t = DEFAULT_MAX_ZOOM)]
    max_zoom: u8,
}

fn main() {
    tilelut::logging::init();

    let cli = Cli::parse();
    let args = GenerateArgs {
        output_dir: cli.output_dir,
        size: cli.size,
        min_zoom: cli.min_zoom,
        max_zoom: cli.max_zoom,
    };

    if let Err(e) = generate::run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
