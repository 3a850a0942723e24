//! Nearest-neighbor giant tour construction.
//!
//! Builds a single visiting order over all customers: starting from the
//! depot, always move to the nearest customer not yet visited. The tour
//! ignores capacity; [`split_routes`](super::split_routes) cuts it into
//! routes afterwards.
//!
//! # Complexity
//!
//! O(n²) distance evaluations where n = number of customers.
//!
//! # Tie-breaking
//!
//! When several customers are equally near, the one that comes first in the
//! working set wins. The working set keeps the input order, so the result is
//! fully determined by the input.

use tracing::debug;

use crate::models::{Customer, Point};

/// Orders customers by repeatedly visiting the nearest unvisited one.
///
/// Consumes `customers` as the working set and returns every customer
/// exactly once, in visit order. An empty set yields an empty tour.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point};
/// use u_cvrp::constructive::build_tour;
///
/// let customers = vec![
///     Customer::new(1, 10.0, 10.0, 3),
///     Customer::new(2, 2.0, 0.0, 6),
///     Customer::new(3, 1.0, 0.0, 5),
/// ];
/// let tour = build_tour(&Point::new(0.0, 0.0), customers);
/// let ids: Vec<usize> = tour.iter().map(|c| c.id()).collect();
/// assert_eq!(ids, vec![3, 2, 1]);
/// ```
pub fn build_tour(depot: &Point, customers: Vec<Customer>) -> Vec<Customer> {
    let mut remaining = customers;
    let mut tour = Vec::with_capacity(remaining.len());
    let mut current = *depot;

    while let Some(next) = nearest(&current, &remaining) {
        let customer = remaining.remove(next);
        current = customer.location();
        tour.push(customer);
    }

    debug!(customers = tour.len(), "built nearest-neighbor tour");
    tour
}

/// Index of the customer nearest to `from`, first one on ties.
///
/// Returns `None` if `candidates` is empty.
fn nearest(from: &Point, candidates: &[Customer]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in candidates.iter().enumerate() {
        let d = c.distance_to(from);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
