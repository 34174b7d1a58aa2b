//! Greedy schedulers that assign parcels to trucks.
//!
//! - [`RandomScheduler`] — uniform random choice among trucks with room
//! - [`MostParcelsScheduler`] — smallest parcels first, largest trucks first
//! - [`ShortRouteScheduler`] — parcels grouped by destination city
//!
//! Every scheduler mutates the trucks it is given and returns the parcels
//! it could not place. Packing is destructive, so comparing heuristics
//! requires giving each run its own copy of the truck set (see
//! [`compare`](crate::comparison::compare)).

mod filters;
mod most_parcels;
mod priority;
mod queue;
mod random;
mod short_route;

use std::fmt;

use crate::models::{Parcel, Truck};

pub use filters::{enough_space, on_route, TruckSlot};
pub use most_parcels::MostParcelsScheduler;
pub use queue::PriorityQueue;
pub use random::RandomScheduler;
pub use short_route::ShortRouteScheduler;

/// A single-use parcel-to-truck assignment strategy.
pub trait Scheduler {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Packs `parcels` onto `trucks` and returns the parcels that no truck
    /// could accommodate when they were considered.
    ///
    /// Parcels are never modified. Consumes the scheduler: one instance
    /// serves exactly one run.
    fn schedule(self, parcels: &[Parcel], trucks: &mut [Truck]) -> Vec<Parcel>
    where
        Self: Sized;
}

/// The heuristics compared in a dispatch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    /// [`RandomScheduler`]
    Random,
    /// [`MostParcelsScheduler`]
    MostParcels,
    /// [`ShortRouteScheduler`]
    ShortRoute,
}

impl HeuristicKind {
    /// All heuristics in report order.
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Random,
        HeuristicKind::MostParcels,
        HeuristicKind::ShortRoute,
    ];

    /// Row label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            HeuristicKind::Random => "Random",
            HeuristicKind::MostParcels => "Most Parcels",
            HeuristicKind::ShortRoute => "Short Route",
        }
    }

    /// Runs this heuristic once. `seed` drives the random heuristic only.
    pub fn run(&self, parcels: &[Parcel], trucks: &mut [Truck], seed: u64) -> Vec<Parcel> {
        match self {
            HeuristicKind::Random => RandomScheduler::seeded(seed).schedule(parcels, trucks),
            HeuristicKind::MostParcels => MostParcelsScheduler::new().schedule(parcels, trucks),
            HeuristicKind::ShortRoute => ShortRouteScheduler::new().schedule(parcels, trucks),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
