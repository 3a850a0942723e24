//! Travel distance of routes and solutions.

use crate::models::{Point, Route, Solution};

/// Distance of one route: depot, each customer in order, back to depot.
///
/// An empty route costs nothing.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point, Route};
/// use u_cvrp::evaluation::route_cost;
///
/// let route: Route = vec![Customer::new(1, 3.0, 4.0, 1)].into_iter().collect();
/// assert!((route_cost(&route, &Point::new(0.0, 0.0)) - 10.0).abs() < 1e-10);
/// ```
pub fn route_cost(route: &Route, depot: &Point) -> f64 {
    let mut total = 0.0;
    let mut prev = *depot;
    for c in route.customers() {
        total += prev.distance_to(&c.location());
        prev = c.location();
    }
    total + prev.distance_to(depot)
}

/// Total travel distance of a solution, recomputed from scratch.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Point, Solution};
/// use u_cvrp::evaluation::total_cost;
///
/// assert_eq!(total_cost(&Solution::new(), &Point::new(0.0, 0.0)), 0.0);
/// ```
pub fn total_cost(solution: &Solution, depot: &Point) -> f64 {
    solution.routes().iter().map(|r| route_cost(r, depot)).sum()
}
