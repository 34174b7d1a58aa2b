//! Short-route scheduler: parcels grouped by destination.
//!
//! Serving parcels in destination-name order keeps parcels for the same
//! city adjacent, so the route-affinity filter consolidates them onto the
//! truck that already stops there.

use crate::models::{Parcel, Truck};

use super::filters::earlier_destination;
use super::priority::pack_by_priority;
use super::Scheduler;

/// Packs parcels in ascending destination-name order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortRouteScheduler;

impl ShortRouteScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ShortRouteScheduler {
    fn name(&self) -> &str {
        "short_route"
    }

    fn schedule(self, parcels: &[Parcel], trucks: &mut [Truck]) -> Vec<Parcel> {
        pack_by_priority(self.name(), parcels, trucks, earlier_destination)
    }
}
