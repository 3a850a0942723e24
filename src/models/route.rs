//! Route type.

use serde::{Deserialize, Serialize};

use super::Customer;

/// An ordered sequence of customers served by one vehicle.
///
/// A route starts and ends at the depot (not stored in `customers`).
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Customer, Route};
///
/// let mut route = Route::new();
/// route.push(Customer::new(1, 1.0, 0.0, 5));
/// route.push(Customer::new(2, 2.0, 0.0, 6));
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.load(), 11);
/// assert_eq!(route.customer_ids(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    customers: Vec<Customer>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a customer to the end of this route.
    pub fn push(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Customers in visit order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customer visits (excluding depot).
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if this route has no customer visits.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Customer ids in visit order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.customers.iter().map(|c| c.id()).collect()
    }

    /// Total demand collected on this route, summed from its customers.
    pub fn load(&self) -> i64 {
        self.customers.iter().map(|c| c.demand() as i64).sum()
    }
}

impl FromIterator<Customer> for Route {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        let mut route = Route::new();
        for c in iter {
            route.push(c);
        }
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.load(), 0);
    }

    #[test]
    fn test_route_push() {
        let mut r = Route::new();
        r.push(Customer::new(5, 0.0, 0.0, 20));
        r.push(Customer::new(3, 1.0, 0.0, 15));
        assert_eq!(r.len(), 2);
        assert_eq!(r.customer_ids(), vec![5, 3]);
        assert_eq!(r.load(), 35);
    }

    #[test]
    fn test_route_from_iter() {
        let r: Route = vec![Customer::new(1, 0.0, 0.0, 4), Customer::new(2, 0.0, 1.0, 6)]
            .into_iter()
            .collect();
        assert_eq!(r.load(), 10);
    }

    #[test]
    fn test_route_load_ignores_stored_field() {
        let json = r#"{"customers":[
            {"id":1,"location":{"x":1.0,"y":0.0},"demand":5},
            {"id":2,"location":{"x":2.0,"y":0.0},"demand":6}
        ],"load":0}"#;
        let r: Route = serde_json::from_str(json).expect("valid route");
        assert_eq!(r.load(), 11);
    }
}
