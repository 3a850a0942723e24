//! # u-cvrp
//!
//! Capacitated vehicle routing by nearest-neighbor construction: one giant
//! tour over all customers, cut greedily into routes that fit vehicle
//! capacity, then costed and checked for feasibility.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Customer, Problem, Route, Solution)
//! - [`constructive`] — Nearest-neighbor tour and greedy capacity split
//! - [`evaluation`] — Travel distance and feasibility verification
//! - [`solver`] — Construct, cost and verify in one call
//! - [`io`] — CSV problem/solution files, SVG drawings, random instances
//! - [`bench`] — Timing of repeated solves
//! - [`error`] — Errors raised at the I/O boundary

pub mod bench;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod solver;

pub use error::RoutingError;
pub use solver::{solve, SolveOutcome};
