//! Candidate filters and orderings shared by the schedulers.
//!
//! Filters work on indices into the caller's truck slice so that the truck
//! finally chosen is always the canonical record, never a copy.

use crate::models::{Parcel, Truck};

/// A truck position in the fleet slice together with its sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruckSlot {
    /// Index into the truck slice.
    pub index: usize,
    /// Total capacity of that truck.
    pub capacity: u64,
}

/// Indices of trucks with at least `volume` space left, in slice order.
pub fn enough_space(volume: u64, trucks: &[Truck]) -> Vec<usize> {
    trucks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.available_space() >= volume)
        .map(|(i, _)| i)
        .collect()
}

/// Narrows `candidates` to trucks already routed through `destination`.
///
/// Returns `candidates` unchanged when none of them visit it.
pub fn on_route(candidates: Vec<usize>, trucks: &[Truck], destination: &str) -> Vec<usize> {
    let matched: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| trucks[i].visits(destination))
        .collect();
    if matched.is_empty() {
        candidates
    } else {
        matched
    }
}

/// Smaller parcels are served first.
pub fn smaller_volume(a: &&Parcel, b: &&Parcel) -> bool {
    a.volume() < b.volume()
}

/// Parcels with a lexicographically smaller destination are served first.
pub fn earlier_destination(a: &&Parcel, b: &&Parcel) -> bool {
    a.destination() < b.destination()
}

/// Larger trucks are filled first.
pub fn larger_capacity(a: &TruckSlot, b: &TruckSlot) -> bool {
    a.capacity > b.capacity
}
