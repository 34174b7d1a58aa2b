//! Side-by-side evaluation of the scheduling heuristics.

use tracing::info;

use crate::distance::DistanceTable;
use crate::error::DispatchError;
use crate::fleet::{Fleet, FleetStats};
use crate::models::{Parcel, Truck};
use crate::scheduling::HeuristicKind;

/// Outcome of one heuristic on its own copy of the trucks.
#[derive(Debug, Clone)]
pub struct HeuristicRun {
    /// Which heuristic produced this run.
    pub kind: HeuristicKind,
    /// The packed trucks.
    pub fleet: Fleet,
    /// Parcels no truck could take.
    pub unpacked: Vec<Parcel>,
    /// Utilization and distance statistics of `fleet`.
    pub stats: FleetStats,
}

/// Runs a single heuristic on a clone of `trucks` and evaluates the result.
pub fn run_heuristic(
    kind: HeuristicKind,
    parcels: &[Parcel],
    trucks: &[Truck],
    distances: &DistanceTable,
    seed: u64,
) -> Result<HeuristicRun, DispatchError> {
    let mut packed = trucks.to_vec();
    let unpacked = kind.run(parcels, &mut packed, seed);
    let fleet = Fleet::from_trucks(packed);
    let stats = fleet.stats(distances)?;
    info!(
        heuristic = kind.label(),
        trucks_used = stats.trucks_used,
        unpacked = unpacked.len(),
        avg_capacity_used = stats.avg_capacity_used,
        avg_distance = stats.avg_distance,
        "heuristic evaluated"
    );
    Ok(HeuristicRun {
        kind,
        fleet,
        unpacked,
        stats,
    })
}

/// Runs every heuristic in [`HeuristicKind::ALL`], each on an independent
/// copy of `trucks`.
///
/// # Errors
///
/// [`DispatchError::UnknownRoute`] if a packed route uses a city pair with
/// no recorded distance.
///
/// # Examples
///
/// ```
/// use u_dispatch::comparison::compare;
/// use u_dispatch::config::FleetConfig;
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::models::{Parcel, Truck};
///
/// let config = FleetConfig::default();
/// let table = DistanceTable::from_entries([("Hamilton", "Toronto", 69)]);
/// let trucks = vec![Truck::at_depot(1, 100, &config).unwrap()];
/// let parcels = vec![Parcel::new(1, 40, "Toronto", "Hamilton", &config).unwrap()];
///
/// let runs = compare(&parcels, &trucks, &table, 7).unwrap();
/// assert_eq!(runs.len(), 3);
/// assert!(runs.iter().all(|r| r.stats.avg_distance == 138.0));
/// // the caller's trucks are untouched
/// assert_eq!(trucks[0].available_space(), 100);
/// ```
pub fn compare(
    parcels: &[Parcel],
    trucks: &[Truck],
    distances: &DistanceTable,
    seed: u64,
) -> Result<Vec<HeuristicRun>, DispatchError> {
    HeuristicKind::ALL
        .iter()
        .map(|&kind| run_heuristic(kind, parcels, trucks, distances, seed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FleetConfig;

    fn config() -> FleetConfig {
        FleetConfig::default()
    }

    #[test]
    fn test_hamilton_scenario() {
        let c = config();
        let table = DistanceTable::from_entries([("Hamilton", "Toronto", 69)]);
        let trucks = vec![Truck::at_depot(1, 100, &c).expect("valid")];
        let parcels = vec![Parcel::new(1, 40, "Toronto", "Hamilton", &c).expect("valid")];

        let run = run_heuristic(HeuristicKind::MostParcels, &parcels, &trucks, &table, 0)
            .expect("edge known");
        let truck = &run.fleet.trucks()[0];
        assert_eq!(truck.available_space(), 60);
        assert_eq!(truck.route(), ["Toronto", "Hamilton"]);
        assert_eq!(truck.capacity_used(), 40.0);
        assert_eq!(run.stats.avg_distance, 138.0);
        assert_eq!(run.fleet.parcel_allocation(1), Some(&[1][..]));
        assert!(run.unpacked.is_empty());
    }

    #[test]
    fn test_runs_are_independent() {
        let c = config();
        let table = DistanceTable::from_entries([
            ("Toronto", "Ajax", 45),
            ("Toronto", "Barrie", 90),
            ("Ajax", "Barrie", 110),
        ]);
        let trucks = vec![
            Truck::at_depot(1, 50, &c).expect("valid"),
            Truck::at_depot(2, 50, &c).expect("valid"),
        ];
        let parcels = vec![
            Parcel::new(1, 30, "Toronto", "Ajax", &c).expect("valid"),
            Parcel::new(2, 30, "Toronto", "Barrie", &c).expect("valid"),
            Parcel::new(3, 20, "Toronto", "Ajax", &c).expect("valid"),
        ];

        let runs = compare(&parcels, &trucks, &table, 9).expect("edges known");
        let kinds: Vec<_> = runs.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, HeuristicKind::ALL.to_vec());
        for run in &runs {
            let loaded: usize = run.fleet.trucks().iter().map(|t| t.parcel_ids().len()).sum();
            // every run sees the full, empty fleet
            assert_eq!(loaded + run.unpacked.len(), parcels.len());
        }
        assert!(trucks.iter().all(|t| !t.is_used()));
    }

    #[test]
    fn test_unknown_edge_fails_comparison() {
        let c = config();
        let trucks = vec![Truck::at_depot(1, 100, &c).expect("valid")];
        let parcels = vec![Parcel::new(1, 40, "Toronto", "Ottawa", &c).expect("valid")];
        let err = compare(&parcels, &trucks, &DistanceTable::new(), 1).expect_err("no edges");
        assert!(matches!(err, DispatchError::UnknownRoute { .. }));
    }

    #[test]
    fn test_nothing_packed() {
        let c = config();
        let trucks = vec![Truck::at_depot(1, 100, &c).expect("valid")];
        let parcels = vec![Parcel::new(1, 150, "Toronto", "Hamilton", &c).expect("valid")];
        let runs = compare(&parcels, &trucks, &DistanceTable::new(), 1).expect("no routes driven");
        for run in runs {
            assert_eq!(run.unpacked.len(), 1);
            assert_eq!(run.fleet.trucks()[0].available_space(), 100);
            assert_eq!(run.stats, FleetStats::default());
        }
    }
}
