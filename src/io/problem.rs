//! Problem files: one `x,y,demand` record per line, depot first.
//!
//! The depot's demand field holds the vehicle capacity. Customers get ids
//! 1..=n in file order.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::error::RoutingError;
use crate::models::{Customer, Point, Problem};

#[derive(Debug, Deserialize)]
struct LocationRecord {
    x: f64,
    y: f64,
    demand: f64,
}

/// Reads a problem from CSV text.
///
/// # Errors
///
/// [`RoutingError::Malformed`] when the input is empty, a record does not
/// have exactly three fields, a field is not a number, a coordinate is not
/// finite, or a demand is not a non-negative integer.
///
/// # Examples
///
/// ```
/// use u_cvrp::io::read_problem;
///
/// let text = "0,0,10\n1,0,5\n2,0,6\n10,10,3\n";
/// let problem = read_problem(text.as_bytes()).unwrap();
/// assert_eq!(problem.vehicle_capacity(), 10);
/// assert_eq!(problem.size(), 3);
/// assert_eq!(problem.customers()[2].id(), 3);
/// ```
pub fn read_problem<R: Read>(reader: R) -> Result<Problem, RoutingError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut depot: Option<(Point, i32)> = None;
    let mut customers = Vec::new();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let (location, demand) = parse_location(&record)?;
        match depot {
            None => depot = Some((location, demand)),
            Some(_) => {
                let id = customers.len() + 1;
                customers.push(Customer::new(id, location.x, location.y, demand));
            }
        }
    }

    let Some((depot, capacity)) = depot else {
        return Err(RoutingError::malformed(1, "missing depot record"));
    };
    debug!(customers = customers.len(), capacity, "read problem");
    Problem::new(depot, capacity, customers)
}

/// Writes a problem in the format read by [`read_problem`].
pub fn write_problem<W: Write>(writer: W, problem: &Problem) -> Result<(), RoutingError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    let depot = problem.depot();
    writer.write_record([
        depot.x.to_string(),
        depot.y.to_string(),
        problem.vehicle_capacity().to_string(),
    ])?;
    for c in problem.customers() {
        writer.write_record([c.x().to_string(), c.y().to_string(), c.demand().to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_location(record: &StringRecord) -> Result<(Point, i32), RoutingError> {
    let line = line_of(record);
    if record.len() != 3 {
        return Err(RoutingError::malformed(
            line,
            format!("expected 3 fields, found {}", record.len()),
        ));
    }
    let parsed: LocationRecord = record
        .deserialize(None)
        .map_err(|err| RoutingError::malformed(line, format!("non-numeric field: {err}")))?;
    if !parsed.x.is_finite() || !parsed.y.is_finite() {
        return Err(RoutingError::malformed(line, "coordinates must be finite"));
    }
    let demand = parse_demand(parsed.demand).ok_or_else(|| {
        RoutingError::malformed(
            line,
            format!("demand must be a non-negative integer, found {}", parsed.demand),
        )
    })?;
    Ok((Point::new(parsed.x, parsed.y), demand))
}

/// Accepts `5` as well as `5.000000`.
pub(crate) fn parse_demand(value: f64) -> Option<i32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

/// A line holding nothing but whitespace.
pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_line(text: &str) -> u64 {
        match read_problem(text.as_bytes()) {
            Err(RoutingError::Malformed { line, .. }) => line,
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    #[test]
    fn test_read_problem() {
        let problem = read_problem("0,0,10\n1,0,5\n2,0,6\n10,10,3\n".as_bytes()).expect("valid");
        assert_eq!(problem.depot(), Point::new(0.0, 0.0));
        assert_eq!(problem.vehicle_capacity(), 10);
        let ids: Vec<usize> = problem.customers().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(problem.customers()[1].demand(), 6);
    }

    #[test]
    fn test_read_problem_whitespace_and_decimals() {
        let problem = read_problem(" 250.5 , 250 , 100\n 1.25,2.5, 7.000000 \n".as_bytes()).expect("valid");
        assert_eq!(problem.depot(), Point::new(250.5, 250.0));
        assert_eq!(problem.customers()[0].demand(), 7);
        assert_eq!(problem.customers()[0].location(), Point::new(1.25, 2.5));
    }

    #[test]
    fn test_read_problem_depot_only() {
        let problem = read_problem("5,5,50\n".as_bytes()).expect("valid");
        assert!(problem.is_empty());
        assert_eq!(problem.vehicle_capacity(), 50);
    }

    #[test]
    fn test_read_problem_empty_input() {
        assert_eq!(malformed_line(""), 1);
        assert_eq!(malformed_line("  \n\n"), 1);
    }

    #[test]
    fn test_read_problem_skips_blank_lines() {
        let problem = read_problem("0,0,10\n \n1,0,5\n\n2,0,6\n".as_bytes()).expect("valid");
        assert_eq!(problem.size(), 2);
        assert_eq!(problem.customers()[1].id(), 2);
    }

    #[test]
    fn test_read_problem_wrong_field_count() {
        assert_eq!(malformed_line("0,0,10\n1,0\n"), 2);
        assert_eq!(malformed_line("0,0,10\n1,0,5,9\n"), 2);
    }

    #[test]
    fn test_read_problem_non_numeric() {
        assert_eq!(malformed_line("0,0,10\n1,zero,5\n"), 2);
    }

    #[test]
    fn test_read_problem_bad_demand() {
        assert_eq!(malformed_line("0,0,10\n1,0,-5\n"), 2);
        assert_eq!(malformed_line("0,0,10\n1,0,2.5\n"), 2);
        assert_eq!(malformed_line("0,0,10.5\n"), 1);
    }

    #[test]
    fn test_read_problem_non_finite() {
        assert_eq!(malformed_line("0,0,10\ninf,0,5\n"), 2);
    }

    #[test]
    fn test_write_then_read_problem() {
        let problem = Problem::new(
            Point::new(250.0, 250.0),
            40,
            vec![Customer::new(1, 12.5, 3.0, 7), Customer::new(2, 400.0, 0.0, 0)],
        )
        .expect("valid");
        let mut buf = Vec::new();
        write_problem(&mut buf, &problem).expect("write");
        assert_eq!(String::from_utf8(buf.clone()).expect("utf8"), "250,250,40\n12.5,3,7\n400,0,0\n");
        assert_eq!(read_problem(buf.as_slice()).expect("read"), problem);
    }
}
