//! Fleet-level aggregation over packed trucks.
//!
//! A [`Fleet`] is built after scheduling and is read-only from then on. Its
//! statistics only consider *used* trucks, those carrying at least one
//! parcel.

mod stats;

use std::collections::BTreeMap;

use tracing::warn;

use crate::distance::DistanceTable;
use crate::error::DispatchError;
use crate::evaluation::{mean, std_dev, RouteEvaluator};
use crate::models::Truck;

pub use stats::FleetStats;

/// A set of trucks with unique ids and their load-order allocations.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::FleetConfig;
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::fleet::Fleet;
/// use u_dispatch::models::{Parcel, Truck};
///
/// let config = FleetConfig::default();
/// let mut truck = Truck::at_depot(1, 100, &config).unwrap();
/// truck.pack(&Parcel::new(1, 40, "Toronto", "Hamilton", &config).unwrap());
///
/// let fleet = Fleet::from_trucks([truck]);
/// let table = DistanceTable::from_entries([("Hamilton", "Toronto", 69)]);
///
/// assert_eq!(fleet.avg_capacity_used(), 40.0);
/// assert_eq!(fleet.avg_distance_travelled(&table).unwrap(), 138.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    trucks: Vec<Truck>,
    allocations: BTreeMap<u64, Vec<u64>>,
}

impl Fleet {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fleet from trucks, ignoring repeated ids.
    pub fn from_trucks<I>(trucks: I) -> Self
    where
        I: IntoIterator<Item = Truck>,
    {
        let mut fleet = Self::new();
        for truck in trucks {
            fleet.add_truck(truck);
        }
        fleet
    }

    /// Registers a truck and snapshots its loaded parcel ids.
    ///
    /// A truck whose id is already registered is ignored; returns `false`
    /// in that case.
    pub fn add_truck(&mut self, truck: Truck) -> bool {
        if self.allocations.contains_key(&truck.id()) {
            warn!(truck = truck.id(), "truck already in fleet, ignoring");
            return false;
        }
        self.allocations.insert(truck.id(), truck.parcel_ids().to_vec());
        self.trucks.push(truck);
        true
    }

    /// All trucks in registration order.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Number of trucks in the fleet.
    pub fn number_of_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Number of trucks carrying at least one parcel.
    pub fn number_trucks_used(&self) -> usize {
        self.used_trucks().count()
    }

    /// Trucks carrying at least one parcel.
    pub fn used_trucks(&self) -> impl Iterator<Item = &Truck> + '_ {
        self.trucks.iter().filter(|t| t.is_used())
    }

    /// Parcel ids loaded on a truck, in load order, as of registration.
    pub fn parcel_allocation(&self, truck_id: u64) -> Option<&[u64]> {
        self.allocations.get(&truck_id).map(Vec::as_slice)
    }

    /// `(truck id, stops)` for every truck, for route listings.
    pub fn routes(&self) -> impl Iterator<Item = (u64, &[String])> + '_ {
        self.trucks.iter().map(|t| (t.id(), t.route()))
    }

    /// Unused space summed over used trucks.
    pub fn free_volume_in_used_trucks(&self) -> u128 {
        self.used_trucks()
            .map(|t| u128::from(t.available_space()))
            .sum()
    }

    /// Mean capacity used (%) over used trucks, `0.0` if none are used.
    pub fn avg_capacity_used(&self) -> f64 {
        mean(&self.capacities_used())
    }

    /// Population standard deviation of capacity used (%) over used trucks.
    pub fn std_dev_capacity_used(&self) -> f64 {
        std_dev(&self.capacities_used())
    }

    /// Mean closed-loop route distance over used trucks.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownRoute`] if any route leg is missing from
    /// `distances`; a single missing leg fails the whole statistic.
    pub fn avg_distance_travelled(&self, distances: &DistanceTable) -> Result<f64, DispatchError> {
        Ok(mean(&self.distances_travelled(distances)?))
    }

    /// Population standard deviation of route distance over used trucks.
    ///
    /// # Errors
    ///
    /// Same as [`avg_distance_travelled`](Self::avg_distance_travelled).
    pub fn std_dev_distance_travelled(
        &self,
        distances: &DistanceTable,
    ) -> Result<f64, DispatchError> {
        Ok(std_dev(&self.distances_travelled(distances)?))
    }

    /// All comparison statistics in one pass.
    pub fn stats(&self, distances: &DistanceTable) -> Result<FleetStats, DispatchError> {
        let capacities = self.capacities_used();
        let travelled = self.distances_travelled(distances)?;
        Ok(FleetStats {
            trucks_used: capacities.len(),
            free_volume: self.free_volume_in_used_trucks(),
            avg_capacity_used: mean(&capacities),
            std_dev_capacity_used: std_dev(&capacities),
            avg_distance: mean(&travelled),
            std_dev_distance: std_dev(&travelled),
        })
    }

    fn capacities_used(&self) -> Vec<f64> {
        self.used_trucks().map(Truck::capacity_used).collect()
    }

    fn distances_travelled(&self, distances: &DistanceTable) -> Result<Vec<f64>, DispatchError> {
        let eval = RouteEvaluator::new(distances);
        self.used_trucks()
            .map(|t| eval.truck_distance(t).map(|d| d as f64))
            .collect()
    }
}
