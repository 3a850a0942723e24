//! Route construction: nearest-neighbor giant tour, then greedy capacity split.
//!
//! - [`build_tour`] — Orders all customers by repeated nearest neighbor, O(n²)
//! - [`split_routes`] — Cuts the tour into capacity-bounded routes, O(n)
//! - [`construct`] — Both steps on a private copy of a problem's customers
//! - [`one_route_per_customer`] — Baseline serving each customer alone

mod nearest_neighbor;
mod split;

pub use nearest_neighbor::build_tour;
pub use split::split_routes;

use crate::models::{Problem, Solution};

/// Builds a solution for `problem` without checking it.
///
/// Works on a clone of the customer list, so the problem is left untouched
/// and repeated calls give identical results.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point, Problem};
/// use u_cvrp::constructive::construct;
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     10,
///     vec![
///         Customer::new(1, 1.0, 0.0, 5),
///         Customer::new(2, 2.0, 0.0, 6),
///         Customer::new(3, 10.0, 10.0, 3),
///     ],
/// )
/// .unwrap();
/// let solution = construct(&problem);
/// assert_eq!(solution.num_routes(), 2);
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn construct(problem: &Problem) -> Solution {
    let tour = build_tour(&problem.depot(), problem.customers().to_vec());
    Solution::from_routes(split_routes(tour, problem.vehicle_capacity()))
}

/// Baseline solution: one out-and-back route per customer, in problem order.
///
/// Feasible whenever every single demand fits the capacity; its cost is an
/// upper reference for [`construct`].
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point, Problem};
/// use u_cvrp::constructive::one_route_per_customer;
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     10,
///     vec![Customer::new(1, 3.0, 4.0, 5), Customer::new(2, 6.0, 8.0, 6)],
/// )
/// .unwrap();
/// let baseline = one_route_per_customer(&problem);
/// assert_eq!(baseline.num_routes(), 2);
/// ```
pub fn one_route_per_customer(problem: &Problem) -> Solution {
    Solution::from_routes(
        problem
            .customers()
            .iter()
            .map(|c| std::iter::once(c.clone()).collect())
            .collect(),
    )
}
