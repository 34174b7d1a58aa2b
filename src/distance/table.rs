//! Symmetric city-pair distance table.

use std::collections::HashMap;

use tracing::debug;

use crate::error::DispatchError;

/// Distances (km) between unordered pairs of named cities.
///
/// Each unordered pair holds at most one distance: the first insert wins and
/// later inserts for the same pair, in either order, are ignored. Lookups
/// try `(a, b)` and then `(b, a)`.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceTable;
///
/// let mut table = DistanceTable::new();
/// table.add_distance("Hamilton", "Toronto", 69);
/// table.add_distance("Toronto", "Hamilton", 70); // ignored
///
/// assert_eq!(table.distance("Toronto", "Hamilton").unwrap(), 69);
/// assert!(table.distance("Toronto", "Ottawa").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: Vec<(String, String, u64)>,
    index: HashMap<String, HashMap<String, usize>>,
}

impl DistanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(city_a, city_b, km)` triples, first write wins.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, u64)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (a, b, d) in entries {
            table.add_distance(a, b, d);
        }
        table
    }

    /// Records the distance between two cities unless the pair is already
    /// present in either order.
    ///
    /// Returns `true` if the distance was stored.
    pub fn add_distance(
        &mut self,
        city_a: impl Into<String>,
        city_b: impl Into<String>,
        distance: u64,
    ) -> bool {
        let city_a = city_a.into();
        let city_b = city_b.into();
        if self.position(&city_a, &city_b).is_some() {
            debug!(%city_a, %city_b, distance, "distance already recorded, ignoring");
            return false;
        }
        let pos = self.entries.len();
        self.index
            .entry(city_a.clone())
            .or_default()
            .insert(city_b.clone(), pos);
        self.entries.push((city_a, city_b, distance));
        true
    }

    /// Distance between two cities, in either order.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownRoute`] if the pair was never added.
    pub fn distance(&self, city_a: &str, city_b: &str) -> Result<u64, DispatchError> {
        self.position(city_a, city_b)
            .map(|pos| self.entries[pos].2)
            .ok_or_else(|| DispatchError::UnknownRoute {
                from: city_a.to_string(),
                to: city_b.to_string(),
            })
    }

    /// Returns `true` if a distance is recorded for the pair in either order.
    pub fn contains(&self, city_a: &str, city_b: &str) -> bool {
        self.position(city_a, city_b).is_some()
    }

    /// All stored `(city_a, city_b, km)` triples in insertion order.
    pub fn all_entries(&self) -> impl Iterator<Item = (&str, &str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(a, b, d)| (a.as_str(), b.as_str(), *d))
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no distances are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, city_a: &str, city_b: &str) -> Option<usize> {
        self.lookup(city_a, city_b).or_else(|| self.lookup(city_b, city_a))
    }

    fn lookup(&self, from: &str, to: &str) -> Option<usize> {
        self.index.get(from)?.get(to).copied()
    }
}
