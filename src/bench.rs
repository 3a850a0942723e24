//! Wall-clock timing of repeated solves.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::constructive::one_route_per_customer;
use crate::evaluation::total_cost;
use crate::models::Problem;
use crate::solver::{solve, SolveOutcome};

/// Timing summary of [`benchmark`].
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Number of customers in the problem.
    pub size: usize,
    /// Number of timed solves.
    pub iterations: usize,
    /// Mean time per solve, in milliseconds.
    pub mean_ms: f64,
    /// Fastest solve, in milliseconds.
    pub min_ms: f64,
    /// Slowest solve, in milliseconds.
    pub max_ms: f64,
    /// Cost of serving every customer on its own route.
    pub baseline_cost: f64,
    /// Outcome of the last solve.
    pub outcome: SolveOutcome,
}

/// Solves `problem` `iterations` times (at least once) and reports timings.
///
/// Every run starts from the untouched problem, so all runs do the same
/// work and produce the same outcome.
///
/// # Examples
///
/// ```
/// use u_cvrp::io::generate_problem;
/// use u_cvrp::bench::benchmark;
///
/// let problem = generate_problem(50, 40, 1).unwrap();
/// let report = benchmark(&problem, 3);
/// assert_eq!(report.iterations, 3);
/// assert!(report.min_ms <= report.mean_ms && report.mean_ms <= report.max_ms);
/// ```
pub fn benchmark(problem: &Problem, iterations: usize) -> BenchmarkReport {
    let iterations = iterations.max(1);
    let mut timings = Vec::with_capacity(iterations);
    let mut last = None;

    for i in 0..iterations {
        let start = Instant::now();
        let outcome = solve(problem);
        let elapsed = start.elapsed();
        debug!(iteration = i, elapsed_us = elapsed.as_micros() as u64, "timed solve");
        timings.push(elapsed);
        last = Some(outcome);
    }

    let total: Duration = timings.iter().sum();
    let millis = |d: &Duration| d.as_secs_f64() * 1000.0;
    BenchmarkReport {
        size: problem.size(),
        iterations,
        mean_ms: millis(&total) / iterations as f64,
        min_ms: timings.iter().map(millis).fold(f64::INFINITY, f64::min),
        max_ms: timings.iter().map(millis).fold(0.0, f64::max),
        baseline_cost: total_cost(&one_route_per_customer(problem), &problem.depot()),
        outcome: last.unwrap_or_else(|| solve(problem)),
    }
}
