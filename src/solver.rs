//! Solve entry point: construct, cost and verify in one call.

use serde::Serialize;
use tracing::{info, warn};

use crate::constructive::construct;
use crate::evaluation::{total_cost, verify, Verification};
use crate::models::{Problem, Solution};

/// A constructed solution together with its cost and feasibility report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveOutcome {
    /// Routes produced by the construction.
    pub solution: Solution,
    /// Total travel distance.
    pub cost: f64,
    /// Result of checking `solution` against the problem.
    pub verification: Verification,
}

impl SolveOutcome {
    /// Returns `true` if the solution passed verification.
    pub fn is_feasible(&self) -> bool {
        self.verification.is_ok()
    }
}

/// Solves `problem` with nearest-neighbor construction and greedy split.
///
/// Construction is permissive: a customer whose demand exceeds vehicle
/// capacity still gets a route. Verification always runs, and any
/// violation is logged and returned in the outcome.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point, Problem};
/// use u_cvrp::solver::solve;
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     10,
///     vec![Customer::new(1, 3.0, 4.0, 10)],
/// )
/// .unwrap();
/// let outcome = solve(&problem);
/// assert!(outcome.is_feasible());
/// assert!((outcome.cost - 10.0).abs() < 1e-10);
/// ```
pub fn solve(problem: &Problem) -> SolveOutcome {
    let solution = construct(problem);
    let depot = problem.depot();
    let cost = total_cost(&solution, &depot);
    let verification = verify(&solution, problem);

    for v in verification.violations() {
        warn!("{v}");
    }
    info!(
        customers = problem.size(),
        routes = solution.num_routes(),
        cost,
        feasible = verification.is_ok(),
        "solved"
    );

    SolveOutcome {
        solution,
        cost,
        verification,
    }
}
