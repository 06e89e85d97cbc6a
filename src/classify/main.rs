//! Batch geofence classifier.
//!
//! Reads points from the command line and/or a CSV file, looks each one up
//! against the bundled regions and any configured fences, and prints one JSON
//! record per point to stdout.

mod input;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hashbrown::HashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

use regionfence::config::Config;
use regionfence::pip::{FenceIndex, FenceService};
use regionfence::Coordinate;

use crate::input::load_points;

#[derive(Parser, Debug)]
#[command(name = "classify")]
#[command(about = "Classify WGS-84 points against regional geofences")]
struct Args {
    /// Point as "lat,lon" (repeatable)
    #[arg(short, long, allow_hyphen_values = true)]
    point: Vec<Coordinate>,

    /// CSV file of points with lat/lon header columns
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML file with additional fences
    #[arg(long)]
    fences: Option<PathBuf>,

    /// Do not include the bundled regions
    #[arg(long)]
    no_builtin: bool,

    /// Log every lookup
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides the default level
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.fences {
        Some(path) => {
            info!("Loading fences from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };
    if args.no_builtin {
        config.include_builtin = false;
    }

    let fences = config.into_fences()?;
    if fences.is_empty() {
        anyhow::bail!("No fences to classify against");
    }

    let service = FenceService::new(FenceIndex::build(fences));

    let mut points = args.point;
    if let Some(path) = &args.file {
        points.extend(load_points(path)?);
    }
    if points.is_empty() {
        anyhow::bail!("No points given; use --point or --file");
    }

    let results = service.classify_all(&points);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut hits: HashMap<&str, usize> = HashMap::new();
    let mut unmatched = 0usize;

    for result in &results {
        serde_json::to_writer(&mut out, result)?;
        writeln!(out)?;

        if result.is_empty() {
            unmatched += 1;
        }
        for name in &result.fences {
            *hits.entry(name.as_str()).or_default() += 1;
        }
    }
    out.flush()?;

    info!("Classified {} points", results.len());
    for fence in service.index().fences() {
        info!(
            "  {}: {}",
            fence.name,
            hits.get(fence.name.as_str()).copied().unwrap_or(0)
        );
    }
    info!("  (none): {}", unmatched);

    Ok(())
}
