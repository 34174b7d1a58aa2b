//! Fleet-wide limits and the common depot.

use std::env;
use std::str::FromStr;

/// Default common depot for every truck in a fleet.
pub const DEFAULT_DEPOT: &str = "Toronto";
/// Largest id a parcel or truck may carry.
pub const DEFAULT_MAX_ID: u64 = 100_000;
/// Largest parcel volume accepted by the loader.
pub const DEFAULT_MAX_VOLUME: u64 = 100_000;
/// Largest inter-city distance (km) accepted by the loader.
pub const DEFAULT_MAX_DISTANCE_KM: u64 = 1_000;

/// Settings shared by every record in one dispatch run.
///
/// Passed explicitly to the [`Parcel`](crate::models::Parcel) and
/// [`Truck`](crate::models::Truck) constructors.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::FleetConfig;
///
/// let config = FleetConfig::default().with_depot("Hamilton");
/// assert_eq!(config.common_depot, "Hamilton");
/// assert_eq!(config.max_id, 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    /// City every truck starts from and returns to.
    pub common_depot: String,
    /// Upper bound (inclusive) for parcel and truck ids.
    pub max_id: u64,
    /// Upper bound (inclusive) for parcel volumes read from input files.
    pub max_volume: u64,
    /// Upper bound (inclusive) for distances read from input files.
    pub max_distance_km: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            common_depot: DEFAULT_DEPOT.to_string(),
            max_id: DEFAULT_MAX_ID,
            max_volume: DEFAULT_MAX_VOLUME,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }
}

/// An environment variable held a value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("environment variable {key} has invalid value {value:?}")]
pub struct ConfigError {
    /// Variable name.
    pub key: &'static str,
    /// Raw value found.
    pub value: String,
}

impl FleetConfig {
    /// Sets the common depot.
    pub fn with_depot(mut self, depot: impl Into<String>) -> Self {
        self.common_depot = depot.into();
        self
    }

    /// Sets the maximum id.
    pub fn with_max_id(mut self, max_id: u64) -> Self {
        self.max_id = max_id;
        self
    }

    /// Defaults overlaid with `DISPATCH_DEPOT`, `DISPATCH_MAX_ID`,
    /// `DISPATCH_MAX_VOLUME` and `DISPATCH_MAX_DISTANCE` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(depot) = env::var("DISPATCH_DEPOT") {
            config.common_depot = depot.trim().to_string();
        }
        if let Some(v) = parse_var("DISPATCH_MAX_ID")? {
            config.max_id = v;
        }
        if let Some(v) = parse_var("DISPATCH_MAX_VOLUME")? {
            config.max_volume = v;
        }
        if let Some(v) = parse_var("DISPATCH_MAX_DISTANCE")? {
            config.max_distance_km = v;
        }
        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { key, value: raw }),
        Err(_) => Ok(None),
    }
}
