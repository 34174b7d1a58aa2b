//! Domain model types for parcel dispatch.
//!
//! Parcels are immutable delivery requests between two cities; trucks carry
//! the mutable load state (remaining space, route, loaded parcel ids) that
//! the schedulers build up.

mod parcel;
mod truck;

pub use parcel::Parcel;
pub use truck::Truck;
