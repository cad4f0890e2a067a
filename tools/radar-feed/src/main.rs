//! radar-feed: run the contact simulator headless and stream snapshots.
//!
//! Usage:
//!   radar-feed --ticks 600 --every 30
//!   radar-feed --fleet harbor.json --own-ship 0,0,1.57 --seed 7
//!
//! Each emitted line is one JSON `RadarSnapshot`. Logs go to stderr and are
//! filtered with `RUST_LOG`.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use radar_sim::{SimConfig, VesselSimulator};
use radar_sim_core::constants::RADAR_RANGE_DEFAULT;
use radar_sim_core::{validate_radar_range, Fleet, OwnShip};

#[derive(Parser, Debug)]
#[command(name = "radar-feed")]
#[command(about = "Stream simulated radar contacts as JSON lines")]
struct Args {
    /// Number of ticks to simulate
    #[arg(short, long, default_value = "300")]
    ticks: u64,

    /// Emit a snapshot every N ticks
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// RNG seed for course corrections
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Radar display range in meters (finite, above zero)
    #[arg(short, long, default_value_t = RADAR_RANGE_DEFAULT, value_parser = parse_range)]
    range: f32,

    /// JSON file with the initial fleet (array of vessel records)
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Own ship as x,y,heading
    #[arg(long, value_parser = parse_own_ship)]
    own_ship: Option<OwnShip>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("radar_feed=info".parse()?)
                .add_directive("radar_sim=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    info!(
        "Starting radar feed: {} contacts, {} ticks, range {} m, seed {}",
        config.fleet.len(),
        args.ticks,
        config.radar_range,
        config.seed
    );

    let mut sim = VesselSimulator::new(config)?;
    if let Some(own) = args.own_ship {
        sim.set_own_ship(own.x, own.y, own.heading);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let emitted = run_feed(&mut sim, args.ticks, args.every, &mut out)?;
    out.flush()?;

    info!("Feed complete: {} snapshots", emitted);
    Ok(())
}

fn build_config(args: &Args) -> Result<SimConfig> {
    let fleet = match &args.fleet {
        Some(path) => load_fleet(path)?,
        None => Fleet::default(),
    };

    Ok(SimConfig {
        seed: args.seed,
        radar_range: args.range,
        fleet,
    })
}

fn load_fleet(path: &Path) -> Result<Fleet> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading fleet file {}", path.display()))?;
    let fleet = Fleet::from_json(&json)
        .with_context(|| format!("loading fleet from {}", path.display()))?;
    debug!("Loaded {} vessels from {}", fleet.len(), path.display());
    Ok(fleet)
}

/// Advance `ticks` times, writing a snapshot line every `every` ticks.
/// Returns the number of snapshots written.
fn run_feed<W: Write>(
    sim: &mut VesselSimulator,
    ticks: u64,
    every: u64,
    out: &mut W,
) -> Result<u64> {
    let mut emitted = 0;
    for _ in 0..ticks {
        sim.advance();
        if sim.tick() % every == 0 {
            serde_json::to_writer(&mut *out, &sim.snapshot())?;
            out.write_all(b"\n")?;
            emitted += 1;
        }
    }
    Ok(emitted)
}

fn parse_range(value: &str) -> Result<f32, String> {
    let meters = value
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid range {value:?}: {e}"))?;
    validate_radar_range(meters).map_err(|e| e.to_string())
}

fn parse_own_ship(value: &str) -> Result<OwnShip, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let &[x, y, heading] = parts.as_slice() else {
        return Err(format!("expected x,y,heading, got {value:?}"));
    };

    let parse = |field: &str, name: &str| {
        field
            .parse::<f32>()
            .map_err(|e| format!("invalid {name} {field:?}: {e}"))
    };
    Ok(OwnShip::new(parse(x, "x")?, parse(y, "y")?, parse(heading, "heading")?))
}
