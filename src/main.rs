use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use polyquery::command::{Interpreter, run_session};
use polyquery::config::FileConfig;
use polyquery::input::load_polygons;

/// Answer area, extreme, count and overlap queries over a set of polygons
///
/// Polygons are read from FILE, one per line: `<N> (x;y) (x;y) ...`.
/// Commands are then read from stdin, one per line:
///
///   AREA EVEN|ODD|MEAN|<N>
///   MAX AREA|VERTEXES
///   MIN AREA|VERTEXES
///   COUNT EVEN|ODD|<N>
///   RMECHO <polygon>
///   INTERSECTIONS <polygon>
///
/// Examples:
///   polyquery shapes.txt < commands.txt
///   echo "AREA MEAN" | polyquery shapes.txt --strict
#[derive(Parser, Debug)]
#[command(name = "polyquery")]
#[command(version, about, long_about = None)]
struct Args {
    /// Polygon file (optional if set in the config file)
    polygons: Option<PathBuf>,

    /// Path to config file (optional, auto-searches polyquery.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report unknown commands as invalid instead of ignoring them
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::from_path(config_path)?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    init_logging(args.verbose || file_config.verbose);

    let strict = args.strict || file_config.strict;
    let polygon_path = args
        .polygons
        .clone()
        .or_else(|| file_config.polygons.clone())
        .context("No polygon file given: pass FILE or set `polygons` in polyquery.toml")?;

    let mut polygons = load_polygons(&polygon_path)?;
    tracing::info!(
        count = polygons.len(),
        path = %polygon_path.display(),
        strict,
        "polygons ready"
    );

    let interpreter = Interpreter::new(strict);
    let stats = run_session(
        io::stdin().lock(),
        io::stdout().lock(),
        &mut polygons,
        &interpreter,
        &file_config.invalid_message,
    )
    .context("Command session failed")?;

    tracing::info!(
        executed = stats.executed,
        failed = stats.failed,
        remaining = polygons.len(),
        "session finished"
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
