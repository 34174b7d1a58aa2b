//! Error types for dispatch construction and lookups.

use std::fmt;

/// The kind of record an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A parcel record.
    Parcel,
    /// A truck record.
    Truck,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Parcel => f.write_str("parcel"),
            Entity::Truck => f.write_str("truck"),
        }
    }
}

/// Data-validity failures raised when building parcels, trucks and fleets,
/// or when looking up a distance.
///
/// None of these are transient: the caller decides whether to abort the run
/// or skip the offending record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// A parcel's source and destination are the same city.
    #[error("source and destination must differ (both are {city})")]
    InvalidRoute {
        /// The repeated city.
        city: String,
    },

    /// An id lies outside the permitted range.
    #[error("{entity} id {id} exceeds the maximum of {max}")]
    InvalidId {
        /// Which record type carried the id.
        entity: Entity,
        /// The rejected id.
        id: u64,
        /// Largest permitted id.
        max: u64,
    },

    /// A truck was declared at a depot other than the fleet's common depot.
    #[error("truck depot {found} does not match the fleet depot {expected}")]
    DepotMismatch {
        /// The configured common depot.
        expected: String,
        /// The depot given for the truck.
        found: String,
    },

    /// An id was registered twice.
    #[error("{entity} id {id} is already registered")]
    DuplicateId {
        /// Which record type carried the id.
        entity: Entity,
        /// The repeated id.
        id: u64,
    },

    /// No distance was ever recorded for this city pair, in either order.
    #[error("no distance recorded between {from} and {to}")]
    UnknownRoute {
        /// First city of the lookup.
        from: String,
        /// Second city of the lookup.
        to: String,
    },

    /// A parcel with zero volume or a truck with zero capacity.
    #[error("{entity} {id} must have a positive volume")]
    InvalidVolume {
        /// Which record type carried the volume.
        entity: Entity,
        /// Id of the offending record.
        id: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = DispatchError::InvalidId {
            entity: Entity::Truck,
            id: 100_001,
            max: 100_000,
        };
        assert_eq!(e.to_string(), "truck id 100001 exceeds the maximum of 100000");

        let e = DispatchError::UnknownRoute {
            from: "Toronto".into(),
            to: "Ottawa".into(),
        };
        assert_eq!(e.to_string(), "no distance recorded between Toronto and Ottawa");
    }
}
