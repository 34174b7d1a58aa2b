//! Summary row for one scheduled fleet.

/// Utilization and distance statistics over a fleet's used trucks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetStats {
    /// Trucks carrying at least one parcel.
    pub trucks_used: usize,
    /// Unused space summed over used trucks.
    pub free_volume: u128,
    /// Mean capacity used, in percent.
    pub avg_capacity_used: f64,
    /// Population standard deviation of capacity used.
    pub std_dev_capacity_used: f64,
    /// Mean closed-loop route distance (km).
    pub avg_distance: f64,
    /// Population standard deviation of route distance.
    pub std_dev_distance: f64,
}
