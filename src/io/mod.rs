//! CSV ingestion of trucks, parcels and distances, and report output.
//!
//! Input files carry no header row:
//!
//! - trucks: `id, capacity`
//! - parcels: `id, source city, destination city, volume`
//! - map: `city, city, distance km`
//!
//! City names are alphabetic; surrounding and inner spaces are dropped.

mod reader;
mod report;

use crate::error::DispatchError;

pub use reader::{read_distances, read_parcels, read_trucks};
pub use report::{format_distances, format_routes, write_report};

/// Failure to read an input file or write a report.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The underlying file could not be opened or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The CSV stream itself was malformed.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A field failed validation.
    #[error("line {line}: {reason}")]
    InvalidField {
        /// 1-based line number in the input.
        line: u64,
        /// What was wrong with the field.
        reason: String,
    },

    /// A well-formed row described an invalid parcel, truck or distance.
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number in the input.
        line: u64,
        /// The rejected construction.
        #[source]
        source: DispatchError,
    },
}
