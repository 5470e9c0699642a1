//! Routes, their defaults, and the route data produced by a match.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::routing::template::RouteTemplate;

/// A default attached to a route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteValue {
    /// Bound when the segment is missing.
    Value(String),
    /// The segment may be missing; nothing is bound.
    Optional,
}

/// Parameter defaults for a route, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDefaults {
    values: BTreeMap<String, RouteValue>,
}

impl RouteDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), RouteValue::Value(value.into()));
        self
    }

    pub fn with_optional(mut self, name: impl Into<String>) -> Self {
        self.values.insert(name.into(), RouteValue::Optional);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RouteValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Only the concrete defaults; optional markers bind nothing.
    pub(crate) fn bound_values(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter_map(|(k, v)| match v {
                RouteValue::Value(value) => Some((k.clone(), value.clone())),
                RouteValue::Optional => None,
            })
            .collect()
    }
}

/// A template plus its defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    template: RouteTemplate,
    defaults: RouteDefaults,
}

impl Route {
    pub fn new(template: &str, defaults: RouteDefaults) -> Result<Self, HarnessError> {
        Ok(Self {
            template: RouteTemplate::parse(template)?,
            defaults,
        })
    }

    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    pub fn defaults(&self) -> &RouteDefaults {
        &self.defaults
    }

    /// Match a path against this route.
    pub fn route_data(&self, path: &str) -> Option<RouteData> {
        self.template.matches(path, &self.defaults).map(|values| RouteData {
            route_name: None,
            template: self.template.as_str().to_string(),
            values,
            matched: true,
        })
    }
}

/// Result of matching a request path against a route.
///
/// Attached to every dispatched request as an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteData {
    pub route_name: Option<String>,
    pub template: String,
    pub values: BTreeMap<String, String>,
    pub matched: bool,
}

impl RouteData {
    /// Empty route data standing in for a routing miss.
    pub fn unmatched(route: &Route) -> Self {
        Self {
            route_name: None,
            template: route.template().as_str().to_string(),
            values: BTreeMap::new(),
            matched: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_data_carries_template_and_defaults() {
        let route = Route::new(
            "widgets/{id?}",
            RouteDefaults::new().with_value("controller", "widgets").with_optional("id"),
        )
        .unwrap();

        let data = route.route_data("/widgets/12").unwrap();
        assert!(data.matched);
        assert_eq!(data.template, "widgets/{id?}");
        assert_eq!(data.get("controller"), Some("widgets"));
        assert_eq!(data.get("id"), Some("12"));

        assert!(route.route_data("/gadgets").is_none());
    }

    #[test]
    fn test_unmatched_is_empty() {
        let route = Route::new("/", RouteDefaults::new()).unwrap();
        let data = RouteData::unmatched(&route);
        assert!(!data.matched);
        assert!(data.values.is_empty());
        assert_eq!(data.template, "/");
    }
}
