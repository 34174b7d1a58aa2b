//! # u-dispatch
//!
//! Parcel-to-truck dispatch library: greedy packing heuristics over a fleet
//! sharing a common depot, evaluated by capacity utilization and distance
//! travelled.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Parcel, Truck)
//! - [`distance`] — Symmetric city-pair distance table
//! - [`evaluation`] — Route distance and population statistics
//! - [`scheduling`] — Random, most-parcels and short-route schedulers
//! - [`fleet`] — Read-side aggregation over packed trucks
//! - [`comparison`] — Runs every heuristic on its own copy of the trucks
//! - [`io`] — CSV input and report output
//! - [`config`] — Common depot and validation limits
//! - [`error`] — Construction and lookup errors

pub mod comparison;
pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod fleet;
pub mod io;
pub mod models;
pub mod scheduling;

pub use error::{DispatchError, Entity};
