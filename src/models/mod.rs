//! Domain model types for capacitated vehicle routing.
//!
//! Provides the core abstractions: points on the plane, customers with
//! demands, a problem instance with a shared vehicle capacity, routes as
//! ordered sequences of customers, and solutions with violation reports.

mod customer;
mod point;
mod problem;
mod route;
mod solution;

pub use customer::Customer;
pub use point::Point;
pub use problem::Problem;
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
