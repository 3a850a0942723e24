//! Reading and writing problems and solutions.
//!
//! - [`read_problem`] / [`write_problem`] — `x,y,demand` CSV, depot first
//!   with the vehicle capacity in its demand field
//! - [`write_solution`] / [`read_solution`] — one route per line
//! - [`render_problem_svg`] / [`render_solution_svg`] — SVG drawings
//! - [`generate_problem`] — seeded random instances

mod generate;
mod problem;
mod solution;
mod svg;

pub use generate::{generate_problem, GRID_SIZE};
pub use problem::{read_problem, write_problem};
pub use solution::{read_solution, write_solution};
pub use svg::{render_problem_svg, render_solution_svg};
