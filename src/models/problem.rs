//! Problem instance.

use std::collections::HashSet;

use serde::Serialize;

use super::{Customer, Point};
use crate::error::RoutingError;

/// A capacitated vehicle routing problem instance.
///
/// Holds the depot location, the capacity shared by every vehicle, and the
/// customers to serve. Solvers read from it and never mutate it.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point, Problem};
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     10,
///     vec![Customer::new(1, 1.0, 0.0, 5), Customer::new(2, 2.0, 0.0, 6)],
/// )
/// .unwrap();
/// assert_eq!(problem.size(), 2);
/// assert_eq!(problem.total_demand(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    depot: Point,
    vehicle_capacity: i32,
    customers: Vec<Customer>,
}

impl Problem {
    /// Creates a problem instance.
    ///
    /// Fails if two customers share an id.
    pub fn new(
        depot: Point,
        vehicle_capacity: i32,
        customers: Vec<Customer>,
    ) -> Result<Self, RoutingError> {
        let mut seen = HashSet::with_capacity(customers.len());
        for c in &customers {
            if !seen.insert(c.id()) {
                return Err(RoutingError::DuplicateCustomerId(c.id()));
            }
        }
        Ok(Self {
            depot,
            vehicle_capacity,
            customers,
        })
    }

    /// Depot location (start and end of every route).
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Maximum total demand a single route may carry.
    pub fn vehicle_capacity(&self) -> i32 {
        self.vehicle_capacity
    }

    /// Customers in load order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customers (excluding the depot).
    pub fn size(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if there are no customers.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: usize) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> i64 {
        self.customers.iter().map(|c| c.demand() as i64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_new() {
        let problem = Problem::new(
            Point::new(0.0, 0.0),
            100,
            vec![Customer::new(1, 3.0, 4.0, 10), Customer::new(2, 6.0, 8.0, 20)],
        )
        .expect("valid");
        assert_eq!(problem.size(), 2);
        assert_eq!(problem.vehicle_capacity(), 100);
        assert_eq!(problem.depot(), Point::new(0.0, 0.0));
        assert_eq!(problem.customer(2).map(|c| c.demand()), Some(20));
        assert!(problem.customer(3).is_none());
    }

    #[test]
    fn test_problem_duplicate_id() {
        let err = Problem::new(
            Point::new(0.0, 0.0),
            100,
            vec![Customer::new(1, 3.0, 4.0, 10), Customer::new(1, 6.0, 8.0, 20)],
        )
        .unwrap_err();
        assert!(matches!(err, RoutingError::DuplicateCustomerId(1)));
    }

    #[test]
    fn test_problem_empty() {
        let problem = Problem::new(Point::new(1.0, 1.0), 10, vec![]).expect("valid");
        assert!(problem.is_empty());
        assert_eq!(problem.total_demand(), 0);
    }

    #[test]
    fn test_duplicate_payload_allowed() {
        let problem = Problem::new(
            Point::new(0.0, 0.0),
            10,
            vec![Customer::new(1, 1.0, 1.0, 3), Customer::new(2, 1.0, 1.0, 3)],
        )
        .expect("distinct ids");
        assert_eq!(problem.size(), 2);
    }
}
