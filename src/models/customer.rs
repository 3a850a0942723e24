//! Customer type.

use serde::{Deserialize, Serialize};

use super::Point;

/// A customer in a routing problem.
///
/// Customers are identified by `id`, which the problem reader assigns in
/// input order (1-based). Location and demand are payload: two customers at
/// the same point with the same demand remain distinct.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point};
///
/// let c = Customer::new(1, 41.0, 49.0, 10);
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 10);
/// assert_eq!(c.location(), Point::new(41.0, 49.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    location: Point,
    demand: i32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: usize, x: f64, y: f64, demand: i32) -> Self {
        Self {
            id,
            location: Point::new(x, y),
            demand,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Location of this customer.
    pub fn location(&self) -> Point {
        self.location
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.location.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.location.y
    }

    /// Demand at this customer (capacity units to pick up).
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Euclidean distance from this customer to a point.
    pub fn distance_to(&self, point: &Point) -> f64 {
        self.location.distance_to(point)
    }
}
