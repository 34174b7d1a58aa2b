//! Greedy priority packing shared by the most-parcels and short-route
//! schedulers.
//!
//! Parcels are served one at a time in the order given by a parcel
//! ordering. For each parcel:
//!
//! 1. candidates = trucks with enough space left (none: parcel is unpacked)
//! 2. prefer candidates already routed through the parcel's destination
//! 3. among those, pick the truck with the largest total capacity
//!    (first in slice order on ties) and pack it there
//!
//! There is no backtracking: trucks never free space, so a parcel rejected
//! once cannot fit later in the same run.

use tracing::{debug, info};

use crate::models::{Parcel, Truck};

use super::filters::{enough_space, larger_capacity, on_route, TruckSlot};
use super::queue::PriorityQueue;

/// Packs `parcels` onto `trucks` in the order given by `parcel_order` and
/// returns the parcels no truck could take.
pub(crate) fn pack_by_priority(
    name: &str,
    parcels: &[Parcel],
    trucks: &mut [Truck],
    parcel_order: fn(&&Parcel, &&Parcel) -> bool,
) -> Vec<Parcel> {
    let mut parcel_queue = PriorityQueue::new(parcel_order);
    parcel_queue.extend(parcels.iter());

    let mut unpacked = Vec::new();
    while let Some(parcel) = parcel_queue.pop() {
        let candidates = enough_space(parcel.volume(), trucks);
        if candidates.is_empty() {
            debug!(
                scheduler = name,
                parcel = parcel.id(),
                volume = parcel.volume(),
                "no truck has room"
            );
            unpacked.push(parcel.clone());
            continue;
        }

        let mut truck_queue = PriorityQueue::new(larger_capacity);
        truck_queue.extend(
            on_route(candidates, trucks, parcel.destination())
                .into_iter()
                .map(|index| TruckSlot {
                    index,
                    capacity: trucks[index].capacity(),
                }),
        );

        if let Some(slot) = truck_queue.pop() {
            let truck = &mut trucks[slot.index];
            truck.pack(parcel);
            debug!(
                scheduler = name,
                parcel = parcel.id(),
                truck = truck.id(),
                remaining = truck.available_space(),
                "packed"
            );
        }
    }

    info!(
        scheduler = name,
        packed = parcels.len() - unpacked.len(),
        unpacked = unpacked.len(),
        "schedule complete"
    );
    unpacked
}
