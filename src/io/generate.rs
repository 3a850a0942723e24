//! Seeded random problem instances.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RoutingError;
use crate::models::{Customer, Point, Problem};

/// Side of the square customers are scattered over.
pub const GRID_SIZE: i32 = 500;

/// Generates a problem with `size` customers on integer coordinates in
/// `[0, 500)`, the depot at the centre, and demands drawn from
/// `1..=capacity / 4` (at least 1).
///
/// The same seed always yields the same instance.
///
/// # Examples
///
/// ```
/// use u_cvrp::io::generate_problem;
///
/// let a = generate_problem(100, 50, 7).unwrap();
/// let b = generate_problem(100, 50, 7).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.size(), 100);
/// ```
pub fn generate_problem(size: usize, capacity: i32, seed: u64) -> Result<Problem, RoutingError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_demand = (capacity / 4).max(1);
    let customers = (1..=size)
        .map(|id| {
            let x = rng.random_range(0..GRID_SIZE);
            let y = rng.random_range(0..GRID_SIZE);
            let demand = rng.random_range(1..=max_demand);
            Customer::new(id, x as f64, y as f64, demand)
        })
        .collect();
    let centre = (GRID_SIZE / 2) as f64;
    Problem::new(Point::new(centre, centre), capacity, customers)
}
