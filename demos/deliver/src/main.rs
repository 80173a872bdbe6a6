//! deliver: plan a single-vehicle delivery route and print the directions.
//!
//! ```text
//! deliver [<map file> <deliveries file>] [--keep-order]
//! ```
//!
//! With no files, a small built-in map and delivery list are used.  Set
//! `RUST_LOG=debug` to see search and ordering details.

mod sample;

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use depot_map::{DeliveryList, StreetMap, load_deliveries, load_deliveries_reader, load_map, load_map_reader};
use depot_route::{PlannerConfig, RoutePlanner};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Plan a single-vehicle delivery route and print turn-by-turn directions.
#[derive(Debug, Parser)]
#[command(name = "deliver", version)]
struct Args {
    /// Street map file. Omit both files to use the built-in sample.
    #[arg(requires = "deliveries")]
    map: Option<PathBuf>,

    /// Delivery list: depot on the first line, then `lat lon:item` per stop.
    #[arg(requires = "map")]
    deliveries: Option<PathBuf>,

    /// Visit stops in the order given instead of reordering them.
    #[arg(long)]
    keep_order: bool,
}

fn load_inputs(args: &Args) -> Result<(StreetMap, DeliveryList)> {
    match (&args.map, &args.deliveries) {
        (Some(map_path), Some(deliveries_path)) => {
            let map = load_map(map_path)
                .with_context(|| format!("loading map {}", map_path.display()))?;
            let list = load_deliveries(deliveries_path)
                .with_context(|| format!("loading deliveries {}", deliveries_path.display()))?;
            Ok((map, list))
        }
        _ => {
            let map = load_map_reader(Cursor::new(sample::MAP)).context("built-in sample map")?;
            let list = load_deliveries_reader(Cursor::new(sample::DELIVERIES))
                .context("built-in sample deliveries")?;
            Ok((map, list))
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let (map, list) = load_inputs(&args)?;

    println!("=== deliver ===");
    println!(
        "Map: {} coordinates, {} segments  |  Depot: {}  |  Stops: {}",
        map.coord_count(),
        map.segment_count(),
        list.depot,
        list.stops.len()
    );
    println!();

    let config = PlannerConfig { reorder_stops: !args.keep_order, ..PlannerConfig::default() };
    let planner = RoutePlanner::with_config(&map, config).context("planner settings")?;

    let started = Instant::now();
    let plan = planner
        .plan(list.depot, &list.stops)
        .context("planning delivery route")?;
    let elapsed = started.elapsed();
    info!(elapsed_ms = elapsed.as_secs_f64() * 1_000.0, "route planned");

    for (i, instruction) in plan.instructions.iter().enumerate() {
        println!("{:>3}. {instruction}", i + 1);
    }

    println!();
    println!(
        "{} deliveries, {:.2} miles total{}",
        plan.deliveries(),
        plan.total_miles,
        if plan.reordered { " (stops reordered)" } else { "" }
    );

    Ok(())
}
