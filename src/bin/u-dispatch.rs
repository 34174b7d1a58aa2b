//! Command line front end: loads trucks, parcels and distances from CSV,
//! runs every heuristic and writes the comparison report.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use u_dispatch::comparison::compare;
use u_dispatch::config::FleetConfig;
use u_dispatch::io::{
    format_distances, format_routes, read_distances, read_parcels, read_trucks, write_report,
};

#[derive(Parser, Debug)]
#[command(version, about = "Compare greedy parcel dispatch heuristics")]
struct Args {
    /// Truck file (`id, capacity` per line)
    #[arg(long, default_value = "truck-data.csv")]
    trucks: PathBuf,

    /// Parcel file (`id, source, destination, volume` per line)
    #[arg(long, default_value = "parcel-data.csv")]
    parcels: PathBuf,

    /// Distance file (`city, city, km` per line)
    #[arg(long, default_value = "map-data.csv")]
    map: PathBuf,

    /// Where to write the comparison report
    #[arg(long, default_value = "route-stats.csv")]
    output: PathBuf,

    /// Common depot for every truck (overrides DISPATCH_DEPOT)
    #[arg(long)]
    depot: Option<String>,

    /// Seed for the random heuristic
    #[arg(long)]
    seed: Option<u64>,

    /// Print the distance table and every route of every heuristic
    #[arg(long)]
    print_routes: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("cannot open {}", path.display()))
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = FleetConfig::from_env()?;
    if let Some(depot) = args.depot {
        config = config.with_depot(depot);
    }

    let trucks = read_trucks(open(&args.trucks)?, &config)
        .with_context(|| format!("invalid truck data in {}", args.trucks.display()))?;
    let parcels = read_parcels(open(&args.parcels)?, &config)
        .with_context(|| format!("invalid parcel data in {}", args.parcels.display()))?;
    let table = read_distances(open(&args.map)?, &config)
        .with_context(|| format!("invalid map data in {}", args.map.display()))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, depot = %config.common_depot, "generating delivery schedules");

    if args.print_routes {
        print!("{}", format_distances(&table));
    }

    let runs = compare(&parcels, &trucks, &table, seed).context("cannot evaluate schedules")?;

    for run in &runs {
        info!(
            heuristic = run.kind.label(),
            unpacked = run.unpacked.len(),
            trucks_used = run.stats.trucks_used,
            "schedule ready"
        );
        if args.print_routes {
            println!("{}:", run.kind);
            print!("{}", format_routes(&run.fleet));
        }
    }

    let output = File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    write_report(output, &runs)?;
    info!(path = %args.output.display(), "report written");
    Ok(())
}
