//! SVG rendering of problems and solutions.
//!
//! Drawings use a fixed 500×500 view box, the coordinate range of generated
//! instances. Each route is a closed path through the depot; each customer a
//! disk labelled with its demand.

use std::fmt::Write;

use crate::models::{Point, Problem, Solution};

const ROUTE_COLORS: [&str; 7] = [
    "chocolate",
    "cornflowerblue",
    "crimson",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgoldenrod",
];

const HEADER: &str = "<?xml version='1.0'?>\n\
<!DOCTYPE svg PUBLIC '-//W3C//DTD SVG 1.1//EN' 'http://www.w3.org/Graphics/SVG/1.1/DTD/svg11-flat.dtd'>\n\
<svg width='8cm' height='8cm' viewBox='0 0 500 500' xmlns='http://www.w3.org/2000/svg' version='1.1'>\n";

const FOOTER: &str = "</svg>\n";

/// Renders the customers and depot of a problem.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point, Problem};
/// use u_cvrp::io::render_problem_svg;
///
/// let problem = Problem::new(Point::new(250.0, 250.0), 10, vec![Customer::new(1, 10.0, 20.0, 4)]).unwrap();
/// let svg = render_problem_svg(&problem);
/// assert!(svg.starts_with("<?xml"));
/// assert!(svg.contains(">4</text>"));
/// ```
pub fn render_problem_svg(problem: &Problem) -> String {
    let mut svg = String::from(HEADER);
    draw_locations(&mut svg, problem);
    svg.push_str(FOOTER);
    svg
}

/// Renders the routes of a solution over the problem's locations.
pub fn render_solution_svg(problem: &Problem, solution: &Solution) -> String {
    let mut svg = String::from(HEADER);
    let depot = problem.depot();
    for (route, color) in solution.routes().iter().zip(ROUTE_COLORS.iter().cycle()) {
        let _ = write!(svg, "<path d='M{} {}", depot.x, depot.y);
        for c in route.customers() {
            let _ = write!(svg, " L{} {}", c.x(), c.y());
        }
        let _ = writeln!(svg, " z' stroke='{color}' fill='none' stroke-width='2'/>");
    }
    draw_locations(&mut svg, problem);
    svg.push_str(FOOTER);
    svg
}

fn draw_locations(svg: &mut String, problem: &Problem) {
    for c in problem.customers() {
        draw_disk(svg, &c.location(), 10, &c.demand().to_string());
    }
    draw_disk(svg, &problem.depot(), 20, "D");
}

fn draw_disk(svg: &mut String, at: &Point, radius: u32, label: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        "<g transform='translate({:.0},{:.0})'>\
<circle cx='0' cy='0' r='{radius}' fill='pink' stroke='black' stroke-width='1'/>\
<text text-anchor='middle' y='5'>{label}</text></g>",
        at.x, at.y
    );
}
