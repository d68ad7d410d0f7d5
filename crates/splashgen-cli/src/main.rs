//! Boot splash generator.
//!
//! Samples the 24-bit color space with a per-channel step, orders the colors
//! along the Morton curve, and writes them as a top-down 24-bit BMP sized to
//! the smallest 16:9 rectangle that holds them all.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use splashgen_core::{generate_colors, write_bmp, CanvasSize};

#[derive(Debug, clap::Parser)]
#[command(name = "splashgen", about = "Generate a Morton-ordered color gradient BMP")]
struct Args {
    /// Per-channel sampling step; 2 samples 0,2,...,254,255
    #[arg(short, long, default_value_t = 2)]
    step: u8,

    /// Output file
    #[arg(short, long, default_value = "color_gradient.bmp")]
    output: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();

    let colors = generate_colors(args.step);
    info!(step = args.step, total_colors = colors.len(), "sampled gradient");

    let size = CanvasSize::for_color_count(colors.len());
    info!(
        width = size.width,
        height = size.height,
        total_pixels = size.area(),
        "computed canvas"
    );

    write_bmp(&args.output, size.width, size.height, &colors)?;
    info!(path = %args.output.display(), "image saved");

    Ok(())
}
