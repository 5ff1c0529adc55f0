//! Garage CLI
//!
//! Builds a garage, parks a list of vehicles in order and prints a JSON report

use anyhow::{Context, Result};
use clap::Parser;
use parking_garage::{GarageConfig, OccupancyStats, Vehicle, VehicleCategory};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "garage")]
#[command(about = "Park vehicles in a multi-level garage using first-fit allocation")]
struct Args {
    /// Path to a TOML garage config (overrides the dimension flags)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of levels
    #[arg(short = 'l', long, default_value = "3")]
    levels: usize,

    /// Rows per level
    #[arg(short = 'r', long, default_value = "5")]
    rows_per_level: usize,

    /// Spots per row
    #[arg(short = 's', long, default_value = "10")]
    spots_per_row: usize,

    /// Seed for a reproducible spot layout
    #[arg(long)]
    seed: Option<u64>,

    /// Vehicles to park, in order (motorcycle, car, bus)
    #[arg(value_parser = parse_vehicle)]
    vehicles: Vec<VehicleCategory>,
}

/// Parse a vehicle category from CLI string
fn parse_vehicle(s: &str) -> Result<VehicleCategory, String> {
    s.parse::<VehicleCategory>().map_err(|_| {
        format!(
            "Invalid vehicle '{}'. Valid options: motorcycle, car, bus",
            s
        )
    })
}

#[derive(Serialize)]
struct Placement {
    vehicle: VehicleCategory,
    spot: Option<usize>,
}

#[derive(Serialize)]
struct Report {
    config: GarageConfig,
    placements: Vec<Placement>,
    occupancy: OccupancyStats,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GarageConfig::load(path)
            .with_context(|| format!("Failed to load garage config {:?}", path))?,
        None => {
            let config = GarageConfig::new(args.levels, args.rows_per_level, args.spots_per_row);
            match args.seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            }
        }
    };

    let mut garage = config
        .builder()
        .build()
        .context("Failed to build garage")?;

    let placements: Vec<Placement> = args
        .vehicles
        .iter()
        .map(|&category| Placement {
            vehicle: category,
            spot: garage.park_at(Vehicle::new(category)),
        })
        .collect();

    let parked = placements.iter().filter(|p| p.spot.is_some()).count();
    info!("Parked {} of {} vehicles", parked, placements.len());

    let report = Report {
        config,
        placements,
        occupancy: garage.occupancy_stats(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
