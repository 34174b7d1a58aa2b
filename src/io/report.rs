//! Comparison report and text listings.

use std::fmt::Write as _;
use std::io::Write;

use serde::Serialize;

use crate::comparison::HeuristicRun;
use crate::distance::DistanceTable;
use crate::fleet::Fleet;

use super::LoadError;

#[derive(Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Scheduler")]
    scheduler: &'a str,
    #[serde(rename = "Free Vol in Used Trucks")]
    free_volume: u128,
    #[serde(rename = "Avg Capacity Used")]
    avg_capacity_used: f64,
    #[serde(rename = "Std Dev Capacity Used")]
    std_dev_capacity_used: f64,
    #[serde(rename = "Avg Dist")]
    avg_distance: f64,
    #[serde(rename = "Std Dev Dist")]
    std_dev_distance: f64,
}

/// Writes one CSV row per heuristic run, preceded by a header row.
pub fn write_report<W: Write>(writer: W, runs: &[HeuristicRun]) -> Result<(), LoadError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for run in runs {
        wtr.serialize(ReportRow {
            scheduler: run.kind.label(),
            free_volume: run.stats.free_volume,
            avg_capacity_used: run.stats.avg_capacity_used,
            std_dev_capacity_used: run.stats.std_dev_capacity_used,
            avg_distance: run.stats.avg_distance,
            std_dev_distance: run.stats.std_dev_distance,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// One `Truck: <id> Route: A -> B -> C` line per truck.
pub fn format_routes(fleet: &Fleet) -> String {
    let mut out = String::new();
    for (id, stops) in fleet.routes() {
        let _ = writeln!(out, "Truck: {id} Route: {}", stops.join(" -> "));
    }
    out
}

/// One `(A, B): km` line per stored distance, in insertion order.
pub fn format_distances(table: &DistanceTable) -> String {
    let mut out = String::new();
    for (a, b, km) in table.all_entries() {
        let _ = writeln!(out, "({a}, {b}): {km}");
    }
    out
}
