//! Feasibility verification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Customer, Problem, Solution, Violation, ViolationType};

/// Outcome of checking a solution against its problem.
///
/// An empty violation list means the solution is feasible.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Verification {
    violations: Vec<Violation>,
}

impl Verification {
    /// Returns `true` if no violation was found.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in detection order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the report, returning its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Checks capacity per route and that every customer is served exactly once.
///
/// Every check runs even after an earlier one fails. Route-level findings
/// (capacity, unknown customers, payload mismatches) come first in route
/// order, followed by missing and duplicated customers in problem order.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Point, Problem};
/// use u_cvrp::constructive::construct;
/// use u_cvrp::evaluation::verify;
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     10,
///     vec![Customer::new(1, 1.0, 0.0, 5), Customer::new(2, 2.0, 0.0, 6)],
/// )
/// .unwrap();
/// let report = verify(&construct(&problem), &problem);
/// assert!(report.is_ok());
/// ```
pub fn verify(solution: &Solution, problem: &Problem) -> Verification {
    let capacity = problem.vehicle_capacity();
    let index: HashMap<usize, &Customer> =
        problem.customers().iter().map(|c| (c.id(), c)).collect();
    let mut visits: HashMap<usize, usize> = HashMap::with_capacity(index.len());
    let mut violations = Vec::new();

    for (route_index, route) in solution.routes().iter().enumerate() {
        let load = route.load();
        if load > capacity as i64 {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index,
                load,
                capacity,
            }));
        }

        for visited in route.customers() {
            let Some(expected) = index.get(&visited.id()) else {
                violations.push(Violation::new(ViolationType::UnknownCustomer {
                    route_index,
                    customer_id: visited.id(),
                }));
                continue;
            };
            *visits.entry(visited.id()).or_insert(0) += 1;

            if visited.demand() != expected.demand() {
                violations.push(Violation::new(ViolationType::DemandMismatch {
                    customer_id: visited.id(),
                    expected: expected.demand(),
                    actual: visited.demand(),
                }));
            }
            if visited.location() != expected.location() {
                violations.push(Violation::new(ViolationType::LocationMismatch {
                    customer_id: visited.id(),
                }));
            }
        }
    }

    for c in problem.customers() {
        match visits.get(&c.id()).copied().unwrap_or(0) {
            0 => violations.push(Violation::new(ViolationType::MissingCustomer {
                customer_id: c.id(),
            })),
            1 => {}
            n => violations.push(Violation::new(ViolationType::DuplicateVisit {
                customer_id: c.id(),
                visits: n,
            })),
        }
    }

    Verification { violations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Route};

    fn problem() -> Problem {
        Problem::new(
            Point::new(0.0, 0.0),
            10,
            vec![
                Customer::new(1, 1.0, 0.0, 5),
                Customer::new(2, 2.0, 0.0, 6),
                Customer::new(3, 10.0, 10.0, 3),
            ],
        )
        .expect("valid")
    }

    fn route(customers: &[Customer]) -> Route {
        customers.iter().cloned().collect()
    }

    fn kinds_of(report: &Verification) -> Vec<ViolationType> {
        report.violations().iter().map(|v| v.kind.clone()).collect()
    }

    fn c(p: &Problem, id: usize) -> Customer {
        p.customer(id).cloned().expect("known id")
    }

    #[test]
    fn test_verify_feasible() {
        let p = problem();
        let sol = Solution::from_routes(vec![route(&[c(&p, 1)]), route(&[c(&p, 2), c(&p, 3)])]);
        assert!(verify(&sol, &p).is_ok());
    }

    #[test]
    fn test_verify_empty_problem() {
        let p = Problem::new(Point::new(0.0, 0.0), 10, vec![]).expect("valid");
        assert!(verify(&Solution::new(), &p).is_ok());
    }

    #[test]
    fn test_verify_capacity_exceeded() {
        let p = problem();
        let sol = Solution::from_routes(vec![route(&[c(&p, 1), c(&p, 2)]), route(&[c(&p, 3)])]);
        let report = verify(&sol, &p);
        assert!(!report.is_ok());
        assert_eq!(
            report.violations(),
            &[Violation::new(ViolationType::CapacityExceeded {
                route_index: 0,
                load: 11,
                capacity: 10,
            })]
        );
    }

    #[test]
    fn test_verify_missing_and_duplicate() {
        let p = problem();
        let sol = Solution::from_routes(vec![route(&[c(&p, 1)]), route(&[c(&p, 1), c(&p, 3)])]);
        let kinds = kinds_of(&verify(&sol, &p));
        assert_eq!(
            kinds,
            vec![
                ViolationType::DuplicateVisit {
                    customer_id: 1,
                    visits: 2
                },
                ViolationType::MissingCustomer { customer_id: 2 },
            ]
        );
    }

    #[test]
    fn test_verify_unknown_customer() {
        let p = problem();
        let stranger = Customer::new(99, 4.0, 4.0, 1);
        let sol = Solution::from_routes(vec![route(&[c(&p, 1), c(&p, 2), c(&p, 3)])]);
        let mut routes = sol.routes().to_vec();
        routes.push(route(&[stranger]));
        let report = verify(&Solution::from_routes(routes), &p);
        // First route is over capacity too: 5 + 6 + 3 = 14.
        assert_eq!(report.violations().len(), 2);
        assert!(report.violations().iter().any(|v| matches!(
            v.kind,
            ViolationType::UnknownCustomer {
                route_index: 1,
                customer_id: 99
            }
        )));
    }

    #[test]
    fn test_verify_payload_mismatch() {
        let p = problem();
        let sol = Solution::from_routes(vec![
            route(&[Customer::new(1, 1.0, 0.0, 4)]),
            route(&[Customer::new(2, 2.0, 1.0, 6), c(&p, 3)]),
        ]);
        let kinds = kinds_of(&verify(&sol, &p));
        assert_eq!(
            kinds,
            vec![
                ViolationType::DemandMismatch {
                    customer_id: 1,
                    expected: 5,
                    actual: 4
                },
                ViolationType::LocationMismatch { customer_id: 2 },
            ]
        );
    }

    #[test]
    fn test_verify_capacity_from_deserialized_route() {
        let p = problem();
        let json = r#"{"routes":[
            {"customers":[
                {"id":1,"location":{"x":1.0,"y":0.0},"demand":5},
                {"id":2,"location":{"x":2.0,"y":0.0},"demand":6}
            ],"load":0},
            {"customers":[{"id":3,"location":{"x":10.0,"y":10.0},"demand":3}],"load":0}
        ]}"#;
        let sol: Solution = serde_json::from_str(json).expect("valid solution");
        assert_eq!(
            kinds_of(&verify(&sol, &p)),
            vec![ViolationType::CapacityExceeded {
                route_index: 0,
                load: 11,
                capacity: 10,
            }]
        );
    }

    #[test]
    fn test_verify_collects_all_checks() {
        let p = problem();
        let sol = Solution::from_routes(vec![route(&[c(&p, 2), c(&p, 2)])]);
        let report = verify(&sol, &p);
        // capacity (12 > 10), duplicate 2, missing 1, missing 3
        assert_eq!(report.violations().len(), 4);
    }
}
