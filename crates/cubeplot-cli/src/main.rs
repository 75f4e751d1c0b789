//! cubeplot - inspect a 3D .cube LUT as a wireframe
//!
//! Reads a .cube file, validates it and builds the wireframe of its
//! color-mapping grid for a plotting backend.

use anyhow::{Context, Result};
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod report;
mod wireframe;

use wireframe::Scene;

#[derive(Parser)]
#[command(name = "cubeplot")]
#[command(author, version, about = "Inspect a 3D .cube LUT as a wireframe")]
#[command(long_about = "
Reads a 3D color lookup table in .cube format and builds a wireframe of its
color-mapping grid: one mesh per red slice, colored along the HSV wheel.
Only LUT_3D_SIZE files are supported.

If the plot is too dense, raise SKIP (default 4) to draw a sparser grid.

Examples:
  cubeplot grade.cube              # Summary, every 4th grid line
  cubeplot grade.cube 8            # Sparser grid
  cubeplot grade.cube 1 --json     # Full scene as JSON
")]
struct Cli {
    /// LUT file (.cube, 3D only)
    lut: PathBuf,

    /// Draw every SKIP-th grid line (>= 1)
    #[arg(default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    skip: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the scene as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Grid stride; clap has already rejected 0.
    fn skip_stride(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.skip as usize).unwrap_or(NonZeroUsize::MIN)
    }
}

/// Logs go to stderr. `RUST_LOG` overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let skip = cli.skip_stride();
    let grid = cubeplot_lut::read_cube(&cli.lut)
        .with_context(|| format!("Failed to load: {}", cli.lut.display()))?;

    let scene = Scene::build(&grid, skip);
    tracing::debug!(
        slices = scene.slices.len(),
        lines = scene.line_count(),
        "wireframe built"
    );

    if cli.json {
        report::print_json(&scene)?;
    } else {
        report::print_text(&cli.lut, &grid, &scene);
    }
    Ok(())
}
