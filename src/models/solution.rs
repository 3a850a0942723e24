//! Solution and violation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Route;

/// A type of feasibility violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Vehicle capacity exceeded.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i64,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// A problem customer is not visited by any route.
    MissingCustomer {
        /// Customer ID.
        customer_id: usize,
    },
    /// A customer is visited by more than one stop.
    DuplicateVisit {
        /// Customer ID.
        customer_id: usize,
        /// Number of visits found.
        visits: usize,
    },
    /// A visited customer does not belong to the problem.
    UnknownCustomer {
        /// Route index in the solution.
        route_index: usize,
        /// Customer ID found in the route.
        customer_id: usize,
    },
    /// The demand collected differs from the problem's record.
    DemandMismatch {
        /// Customer ID.
        customer_id: usize,
        /// Demand in the problem.
        expected: i32,
        /// Demand in the solution.
        actual: i32,
    },
    /// The visited location differs from the problem's record.
    LocationMismatch {
        /// Customer ID.
        customer_id: usize,
    },
}

/// A feasibility violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationType::CapacityExceeded {
                route_index,
                load,
                capacity,
            } => write!(
                f,
                "route {route_index} is over capacity: load {load} > {capacity}"
            ),
            ViolationType::MissingCustomer { customer_id } => {
                write!(f, "customer {customer_id} is not visited")
            }
            ViolationType::DuplicateVisit {
                customer_id,
                visits,
            } => write!(f, "customer {customer_id} is visited {visits} times"),
            ViolationType::UnknownCustomer {
                route_index,
                customer_id,
            } => write!(
                f,
                "route {route_index} visits customer {customer_id} which is not in the problem"
            ),
            ViolationType::DemandMismatch {
                customer_id,
                expected,
                actual,
            } => write!(
                f,
                "customer {customer_id} has {} left over (expected {expected}, collected {actual})",
                *expected as i64 - *actual as i64
            ),
            ViolationType::LocationMismatch { customer_id } => {
                write!(f, "customer {customer_id} is visited at the wrong location")
            }
        }
    }
}

/// A complete solution to a routing problem.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(vec![Customer::new(1, 1.0, 0.0, 5)].into_iter().collect());
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_served(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customer visits across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}
