//! Solution files: one route per line, `x1,y1,c1,x2,y2,c2,...`.

use std::collections::HashMap;
use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::debug;

use super::problem::{is_blank, line_of, parse_demand};
use crate::error::RoutingError;
use crate::models::{Customer, Problem, Route, Solution};

/// Writes each non-empty route as one line of `x,y,demand` triples.
///
/// Coordinates are written with six decimals, demands as integers.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Route, Solution};
/// use u_cvrp::io::write_solution;
///
/// let route: Route = vec![Customer::new(1, 1.0, 0.0, 5), Customer::new(2, 2.5, 0.0, 6)]
///     .into_iter()
///     .collect();
/// let mut out = Vec::new();
/// write_solution(&mut out, &Solution::from_routes(vec![route])).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "1.000000,0.000000,5,2.500000,0.000000,6\n"
/// );
/// ```
pub fn write_solution<W: Write>(writer: W, solution: &Solution) -> Result<(), RoutingError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);
    for route in solution.routes().iter().filter(|r| !r.is_empty()) {
        let fields = route.customers().iter().flat_map(|c| {
            [
                format!("{:.6}", c.x()),
                format!("{:.6}", c.y()),
                c.demand().to_string(),
            ]
        });
        writer.write_record(fields)?;
    }
    writer.flush()?;
    Ok(())
}

type PayloadKey = (String, String, i32);

fn payload_key(x: f64, y: f64, demand: i32) -> PayloadKey {
    (format!("{x:.6}"), format!("{y:.6}"), demand)
}

/// Matches triples read from a solution file to problem customers.
struct Resolver<'a> {
    problem: &'a Problem,
    by_payload: HashMap<PayloadKey, Vec<usize>>,
    claimed: Vec<bool>,
    next_unknown_id: usize,
}

impl<'a> Resolver<'a> {
    fn new(problem: &'a Problem) -> Self {
        let mut by_payload: HashMap<PayloadKey, Vec<usize>> = HashMap::new();
        for (idx, c) in problem.customers().iter().enumerate() {
            by_payload
                .entry(payload_key(c.x(), c.y(), c.demand()))
                .or_default()
                .push(idx);
        }
        let max_id = problem.customers().iter().map(|c| c.id()).max().unwrap_or(0);
        Self {
            problem,
            by_payload,
            claimed: vec![false; problem.size()],
            next_unknown_id: max_id + 1,
        }
    }

    /// First unclaimed match, else the first match, else a fresh id.
    fn resolve(&mut self, x: f64, y: f64, demand: i32) -> Customer {
        let candidates = self
            .by_payload
            .get(&payload_key(x, y, demand))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let chosen = candidates
            .iter()
            .copied()
            .find(|&idx| !self.claimed[idx])
            .or_else(|| candidates.first().copied());

        match chosen {
            Some(idx) => {
                self.claimed[idx] = true;
                self.problem.customers()[idx].clone()
            }
            None => {
                let id = self.next_unknown_id;
                self.next_unknown_id += 1;
                Customer::new(id, x, y, demand)
            }
        }
    }
}

/// Reads a solution written by [`write_solution`] (or by hand) for `problem`.
///
/// Each triple is matched to a problem customer with the same coordinates
/// (to six decimals) and demand. When every match is already taken, the
/// first one is reused, so [`verify`](crate::evaluation::verify) reports a
/// duplicate visit. Triples with no match get ids outside the problem and
/// are reported as unknown customers.
///
/// # Errors
///
/// [`RoutingError::Malformed`] when a line's field count is not a multiple
/// of three or a field is not a number.
pub fn read_solution<R: Read>(reader: R, problem: &Problem) -> Result<Solution, RoutingError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut resolver = Resolver::new(problem);
    let mut solution = Solution::new();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        solution.add_route(parse_route(&record, &mut resolver)?);
    }

    debug!(routes = solution.num_routes(), "read solution");
    Ok(solution)
}

fn parse_route(record: &StringRecord, resolver: &mut Resolver<'_>) -> Result<Route, RoutingError> {
    let line = line_of(record);
    if record.len() % 3 != 0 {
        return Err(RoutingError::malformed(
            line,
            format!("expected x,y,demand triples, found {} fields", record.len()),
        ));
    }

    let number = |field: &str| {
        field
            .parse::<f64>()
            .map_err(|_| RoutingError::malformed(line, format!("non-numeric field {field:?}")))
    };

    let fields: Vec<&str> = record.iter().collect();
    let mut route = Route::new();
    for triple in fields.chunks(3) {
        let x = number(triple[0])?;
        let y = number(triple[1])?;
        let raw_demand = number(triple[2])?;
        let demand = parse_demand(raw_demand).ok_or_else(|| {
            RoutingError::malformed(
                line,
                format!("demand must be a non-negative integer, found {raw_demand}"),
            )
        })?;
        route.push(resolver.resolve(x, y, demand));
    }
    Ok(route)
}
