//! Solution cost and feasibility checking.
//!
//! - [`total_cost`] / [`route_cost`] — depot-to-depot Euclidean travel distance
//! - [`verify`] — capacity, coverage and payload checks, reported as a
//!   [`Verification`]

mod cost;
mod verify;

pub use cost::{route_cost, total_cost};
pub use verify::{verify, Verification};
