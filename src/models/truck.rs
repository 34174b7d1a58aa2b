//! Truck type with capacity, route and load state.

use crate::config::FleetConfig;
use crate::error::{DispatchError, Entity};

use super::Parcel;

/// A delivery truck that starts at the fleet's common depot.
///
/// Available space only ever shrinks, the route always begins with the
/// depot, and loaded parcel ids are kept in load order.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::FleetConfig;
/// use u_dispatch::models::{Parcel, Truck};
///
/// let config = FleetConfig::default();
/// let mut truck = Truck::at_depot(1, 100, &config).unwrap();
/// let parcel = Parcel::new(1, 40, "Toronto", "Hamilton", &config).unwrap();
///
/// assert!(truck.pack(&parcel));
/// assert_eq!(truck.available_space(), 60);
/// assert_eq!(truck.route(), ["Toronto", "Hamilton"]);
/// assert_eq!(truck.capacity_used(), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truck {
    id: u64,
    capacity: u64,
    available_space: u64,
    route: Vec<String>,
    parcel_ids: Vec<u64>,
}

impl Truck {
    /// Creates an empty truck declared at `depot`.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::InvalidId`] if `id > config.max_id`
    /// - [`DispatchError::DepotMismatch`] if `depot` is not the common depot
    /// - [`DispatchError::InvalidVolume`] if `capacity == 0`
    pub fn new(
        id: u64,
        capacity: u64,
        depot: &str,
        config: &FleetConfig,
    ) -> Result<Self, DispatchError> {
        if id > config.max_id {
            return Err(DispatchError::InvalidId {
                entity: Entity::Truck,
                id,
                max: config.max_id,
            });
        }
        if depot != config.common_depot {
            return Err(DispatchError::DepotMismatch {
                expected: config.common_depot.clone(),
                found: depot.to_string(),
            });
        }
        if capacity == 0 {
            return Err(DispatchError::InvalidVolume {
                entity: Entity::Truck,
                id,
            });
        }
        Ok(Self {
            id,
            capacity,
            available_space: capacity,
            route: vec![depot.to_string()],
            parcel_ids: Vec::new(),
        })
    }

    /// Creates an empty truck at the configured common depot.
    pub fn at_depot(id: u64, capacity: u64, config: &FleetConfig) -> Result<Self, DispatchError> {
        Self::new(id, capacity, &config.common_depot, config)
    }

    /// Loads `parcel` if it fits in the remaining space.
    ///
    /// On success the parcel id is appended to the load list, the space is
    /// reduced by its volume, and its destination is appended to the route
    /// unless the route already visits that city. Returns `false` and leaves
    /// the truck untouched when the parcel does not fit.
    pub fn pack(&mut self, parcel: &Parcel) -> bool {
        if parcel.volume() > self.available_space {
            return false;
        }
        self.parcel_ids.push(parcel.id());
        self.available_space -= parcel.volume();
        if !self.visits(parcel.destination()) {
            self.route.push(parcel.destination().to_string());
        }
        true
    }

    /// Truck ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Total load capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Capacity not yet taken by loaded parcels.
    pub fn available_space(&self) -> u64 {
        self.available_space
    }

    /// Depot city (first stop of the route).
    pub fn depot(&self) -> &str {
        &self.route[0]
    }

    /// Ordered stops, starting with the depot.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Loaded parcel ids in load order.
    pub fn parcel_ids(&self) -> &[u64] {
        &self.parcel_ids
    }

    /// Returns `true` if `city` is already on this truck's route.
    pub fn visits(&self, city: &str) -> bool {
        self.route.iter().any(|stop| stop == city)
    }

    /// Returns `true` if at least one parcel has been loaded.
    pub fn is_used(&self) -> bool {
        self.available_space != self.capacity
    }

    /// Percentage of total capacity occupied by loaded parcels.
    pub fn capacity_used(&self) -> f64 {
        100.0 * (1.0 - self.available_space as f64 / self.capacity as f64)
    }
}
