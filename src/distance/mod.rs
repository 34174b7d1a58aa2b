//! Inter-city distances.
//!
//! Provides a flat symmetric lookup keyed by unordered city pairs.

mod table;

pub use table::DistanceTable;
