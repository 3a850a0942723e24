//! Greedy capacity split of a giant tour.
//!
//! # Algorithm
//!
//! Walks the tour once, filling the current route until the next customer
//! would push its load over vehicle capacity; that customer then opens a new
//! route. Unlike an optimal (shortest-path) split, a route is never closed
//! early to save distance.
//!
//! A customer whose demand alone exceeds capacity still gets a route of its
//! own. Such routes are over capacity and are reported by
//! [`verify`](crate::evaluation::verify), never rejected here.
//!
//! Only non-empty routes are emitted.
//!
//! # Complexity
//!
//! O(n) where n = tour length.

use tracing::debug;

use crate::models::{Customer, Route};

/// Cuts a tour into consecutive routes that respect `capacity`.
///
/// Route order and the order inside each route follow the tour, so
/// concatenating the routes gives back the tour.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Customer;
/// use u_cvrp::constructive::split_routes;
///
/// let tour = vec![
///     Customer::new(1, 1.0, 0.0, 5),
///     Customer::new(2, 2.0, 0.0, 6),
///     Customer::new(3, 10.0, 10.0, 3),
/// ];
/// let routes = split_routes(tour, 10);
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].customer_ids(), vec![1]);
/// assert_eq!(routes[1].customer_ids(), vec![2, 3]);
/// ```
pub fn split_routes(tour: Vec<Customer>, capacity: i32) -> Vec<Route> {
    let capacity = capacity as i64;
    let mut routes = Vec::new();
    let mut current = Route::new();

    for customer in tour {
        if !current.is_empty() && current.load() + customer.demand() as i64 > capacity {
            routes.push(std::mem::take(&mut current));
        }
        current.push(customer);
    }

    if !current.is_empty() {
        routes.push(current);
    }

    debug!(routes = routes.len(), capacity, "split tour into routes");
    routes
}
