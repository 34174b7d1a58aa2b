//! Route evaluator that computes closed-loop travel distance.

use crate::distance::DistanceTable;
use crate::error::DispatchError;
use crate::models::Truck;

/// Computes route distances against a [`DistanceTable`].
///
/// A route is driven as `depot -> stop 1 -> ... -> stop n` and then closed
/// with one leg from the last stop back to the depot. A route holding only
/// the depot has length zero.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::evaluation::RouteEvaluator;
///
/// let table = DistanceTable::from_entries([
///     ("Toronto", "Hamilton", 69),
///     ("Hamilton", "Barrie", 145),
///     ("Barrie", "Toronto", 90),
/// ]);
/// let eval = RouteEvaluator::new(&table);
///
/// let route = ["Toronto", "Hamilton", "Barrie"].map(String::from);
/// assert_eq!(eval.route_distance(&route).unwrap(), 69 + 145 + 90);
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceTable,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the given table.
    pub fn new(distances: &'a DistanceTable) -> Self {
        Self { distances }
    }

    /// Total distance of the closed loop through `stops`.
    ///
    /// Legs are summed as `u128`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownRoute`] if any leg is missing from the table.
    pub fn route_distance(&self, stops: &[String]) -> Result<u128, DispatchError> {
        if stops.len() < 2 {
            return Ok(0);
        }

        let mut total: u128 = 0;
        for leg in stops.windows(2) {
            total += u128::from(self.distances.distance(&leg[0], &leg[1])?);
        }

        // Return to depot
        total += u128::from(self.distances.distance(&stops[stops.len() - 1], &stops[0])?);
        Ok(total)
    }

    /// Distance travelled by a truck along its current route.
    pub fn truck_distance(&self, truck: &Truck) -> Result<u128, DispatchError> {
        self.route_distance(truck.route())
    }
}
