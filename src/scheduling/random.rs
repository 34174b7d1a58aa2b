//! Random scheduler: the baseline the other heuristics are measured against.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::models::{Parcel, Truck};

use super::filters::enough_space;
use super::Scheduler;

/// Places each parcel, in input order, on a truck drawn uniformly at random
/// from those with enough space at that moment.
///
/// Ignores route affinity and truck size.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::FleetConfig;
/// use u_dispatch::models::{Parcel, Truck};
/// use u_dispatch::scheduling::{RandomScheduler, Scheduler};
///
/// let config = FleetConfig::default();
/// let parcels = vec![Parcel::new(1, 30, "Toronto", "Ajax", &config).unwrap()];
/// let mut trucks = vec![
///     Truck::at_depot(1, 50, &config).unwrap(),
///     Truck::at_depot(2, 50, &config).unwrap(),
/// ];
///
/// let unpacked = RandomScheduler::seeded(42).schedule(&parcels, &mut trucks);
/// assert!(unpacked.is_empty());
/// assert_eq!(trucks.iter().filter(|t| t.is_used()).count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RandomScheduler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomScheduler<R> {
    /// Creates a scheduler drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomScheduler<StdRng> {
    /// Creates a reproducible scheduler from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scheduler for RandomScheduler<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn schedule(mut self, parcels: &[Parcel], trucks: &mut [Truck]) -> Vec<Parcel> {
        let mut unpacked = Vec::new();

        for parcel in parcels {
            let candidates = enough_space(parcel.volume(), trucks);
            if candidates.is_empty() {
                debug!(scheduler = "random", parcel = parcel.id(), "no truck has room");
                unpacked.push(parcel.clone());
                continue;
            }

            let pick = candidates[self.rng.random_range(0..candidates.len())];
            let truck = &mut trucks[pick];
            truck.pack(parcel);
            debug!(
                scheduler = "random",
                parcel = parcel.id(),
                truck = truck.id(),
                "packed"
            );
        }

        info!(
            scheduler = "random",
            packed = parcels.len() - unpacked.len(),
            unpacked = unpacked.len(),
            "schedule complete"
        );
        unpacked
    }
}
