//! Most-parcels scheduler: small parcels first, onto the largest trucks.
//!
//! Serving parcels in ascending volume order packs as many parcels as
//! possible, and preferring large trucks keeps the number of trucks used low.

use crate::models::{Parcel, Truck};

use super::filters::smaller_volume;
use super::priority::pack_by_priority;
use super::Scheduler;

/// Packs parcels in ascending volume order.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::FleetConfig;
/// use u_dispatch::models::{Parcel, Truck};
/// use u_dispatch::scheduling::{MostParcelsScheduler, Scheduler};
///
/// let config = FleetConfig::default();
/// let parcels = vec![
///     Parcel::new(1, 70, "Toronto", "Hamilton", &config).unwrap(),
///     Parcel::new(2, 20, "Toronto", "Hamilton", &config).unwrap(),
///     Parcel::new(3, 20, "Toronto", "Barrie", &config).unwrap(),
/// ];
/// let mut trucks = vec![Truck::at_depot(1, 100, &config).unwrap()];
///
/// let unpacked = MostParcelsScheduler::new().schedule(&parcels, &mut trucks);
/// assert_eq!(unpacked.len(), 1);
/// assert_eq!(unpacked[0].id(), 1);
/// assert_eq!(trucks[0].parcel_ids(), [2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MostParcelsScheduler;

impl MostParcelsScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for MostParcelsScheduler {
    fn name(&self) -> &str {
        "most_parcels"
    }

    fn schedule(self, parcels: &[Parcel], trucks: &mut [Truck]) -> Vec<Parcel> {
        pack_by_priority(self.name(), parcels, trucks, smaller_volume)
    }
}
