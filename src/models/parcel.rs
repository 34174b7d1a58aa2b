//! Parcel type.

use crate::config::FleetConfig;
use crate::error::{DispatchError, Entity};

/// A parcel to be delivered from a source city to a destination city.
///
/// Parcels are immutable once built. Trucks refer to them by id only.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::FleetConfig;
/// use u_dispatch::models::Parcel;
///
/// let config = FleetConfig::default();
/// let p = Parcel::new(7, 40, "Toronto", "Hamilton", &config).unwrap();
/// assert_eq!(p.id(), 7);
/// assert_eq!(p.volume(), 40);
/// assert_eq!(p.destination(), "Hamilton");
///
/// assert!(Parcel::new(8, 40, "Toronto", "Toronto", &config).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    id: u64,
    volume: u64,
    source: String,
    destination: String,
}

impl Parcel {
    /// Creates a parcel.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::InvalidRoute`] if `source == destination`
    /// - [`DispatchError::InvalidId`] if `id > config.max_id`
    /// - [`DispatchError::InvalidVolume`] if `volume == 0`
    pub fn new(
        id: u64,
        volume: u64,
        source: impl Into<String>,
        destination: impl Into<String>,
        config: &FleetConfig,
    ) -> Result<Self, DispatchError> {
        let source = source.into();
        let destination = destination.into();
        if source == destination {
            return Err(DispatchError::InvalidRoute { city: source });
        }
        if id > config.max_id {
            return Err(DispatchError::InvalidId {
                entity: Entity::Parcel,
                id,
                max: config.max_id,
            });
        }
        if volume == 0 {
            return Err(DispatchError::InvalidVolume {
                entity: Entity::Parcel,
                id,
            });
        }
        Ok(Self {
            id,
            volume,
            source,
            destination,
        })
    }

    /// Parcel ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Volume occupied on a truck.
    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// City the parcel is picked up from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// City the parcel is delivered to.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_new() {
        let p = Parcel::new(1, 40, "Toronto", "Hamilton", &FleetConfig::default())
            .expect("valid");
        assert_eq!(p.id(), 1);
        assert_eq!(p.volume(), 40);
        assert_eq!(p.source(), "Toronto");
        assert_eq!(p.destination(), "Hamilton");
    }

    #[test]
    fn test_same_city_rejected() {
        let err = Parcel::new(1, 40, "Ottawa", "Ottawa", &FleetConfig::default())
            .expect_err("same city");
        assert_eq!(
            err,
            DispatchError::InvalidRoute {
                city: "Ottawa".into()
            }
        );
    }

    #[test]
    fn test_id_limit() {
        let config = FleetConfig::default();
        assert!(Parcel::new(100_000, 1, "A", "B", &config).is_ok());
        let err = Parcel::new(100_001, 1, "A", "B", &config).expect_err("too large");
        assert!(matches!(
            err,
            DispatchError::InvalidId {
                entity: Entity::Parcel,
                id: 100_001,
                ..
            }
        ));
    }

    #[test]
    fn test_route_checked_before_id() {
        let err = Parcel::new(999_999, 1, "A", "A", &FleetConfig::default())
            .expect_err("both invalid");
        assert!(matches!(err, DispatchError::InvalidRoute { .. }));
    }

    #[test]
    fn test_zero_volume_rejected() {
        let err = Parcel::new(3, 0, "A", "B", &FleetConfig::default()).expect_err("empty");
        assert!(matches!(err, DispatchError::InvalidVolume { id: 3, .. }));
    }
}
