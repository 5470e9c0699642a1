//! Named route table.
//!
//! # Responsibilities
//! - Store routes keyed by name, in registration order
//! - Look up the first route matching a path
//!
//! # Design Decisions
//! - Re-registering a name replaces the route in place (last write wins)
//! - First match wins, in registration order
//! - Linear scan; tables hold a handful of routes

use crate::routing::route::{Route, RouteData};

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<(String, Route)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a named route. Returns the replaced route, if any.
    pub fn insert(&mut self, name: impl Into<String>, route: Route) -> Option<Route> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, route)),
            None => {
                self.entries.push((name, route));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// First route whose template matches the path.
    pub fn match_path(&self, path: &str) -> Option<RouteData> {
        self.entries
            .iter()
            .find_map(|(name, route)| route.route_data(path).map(|data| data.named(name.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::RouteDefaults;

    fn route(template: &str) -> Route {
        Route::new(template, RouteDefaults::new()).unwrap()
    }

    #[test]
    fn test_last_write_wins_in_place() {
        let mut table = RouteTable::new();
        assert!(table.insert("widgets", route("widgets/{id?}")).is_none());
        table.insert("orders", route("orders/{id?}"));

        let replaced = table.insert("widgets", route("api/widgets"));
        assert_eq!(replaced.unwrap().template().as_str(), "widgets/{id?}");

        assert_eq!(table.len(), 2);
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["widgets", "orders"]);
        assert_eq!(table.get("widgets").unwrap().template().as_str(), "api/widgets");
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = RouteTable::new();
        table.insert("specific", route("items/special"));
        table.insert("general", route("items/{id}"));

        let data = table.match_path("/items/special").unwrap();
        assert_eq!(data.route_name.as_deref(), Some("specific"));

        let data = table.match_path("/items/9").unwrap();
        assert_eq!(data.route_name.as_deref(), Some("general"));
        assert_eq!(data.get("id"), Some("9"));

        assert!(table.match_path("/nothing/here/at/all").is_none());
    }
}
