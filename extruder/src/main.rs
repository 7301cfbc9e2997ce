//! Tile-sheet border extruder.
//!
//! Usage: `extruder [OPTIONS] <TILE_WIDTH> <TILE_HEIGHT> <SOURCE> [DESTINATION]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use extruder::{ImageFormat, Job, OutputPolicy, TracingLogger, run};

#[derive(Parser, Debug)]
#[command(name = "extruder", version)]
#[command(about = "Extrude a 1-pixel border around every tile of a tile sheet")]
struct Args {
    /// Width of one tile in pixels
    #[arg(allow_negative_numbers = true)]
    tile_width: i64,

    /// Height of one tile in pixels
    #[arg(allow_negative_numbers = true)]
    tile_height: i64,

    /// Source tile sheet
    source: PathBuf,

    /// Output image (default: overwrite SOURCE)
    destination: Option<PathBuf>,

    /// Write next to SOURCE as <stem><SUFFIX>.<ext>, e.g. "_ext"
    #[arg(long, conflicts_with = "destination")]
    suffix: Option<String>,

    /// Output format (default: from the destination extension)
    #[arg(long, value_parser = parse_format)]
    format: Option<ImageFormat>,

    /// Log level
    #[arg(long, default_value = "info", env = "EXTRUDER_LOG_LEVEL")]
    log_level: String,
}

fn parse_format(value: &str) -> Result<ImageFormat, String> {
    match ImageFormat::from_extension(value.trim_start_matches('.')) {
        ImageFormat::Unknown => Err(format!("unknown image format '{value}'")),
        format => Ok(format),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins over --log-level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let job = Job {
        tile_width: args.tile_width,
        tile_height: args.tile_height,
        source: args.source,
        policy: OutputPolicy::from_options(args.destination, args.suffix),
        format: args.format,
    };

    match run(&job, &TracingLogger) {
        Ok(report) => {
            tracing::debug!(
                destination = %report.destination.display(),
                tiles = report.grid.tile_count(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
