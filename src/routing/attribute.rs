//! Attribute routes, registered explicitly by a route source.

use crate::error::HarnessError;
use crate::routing::route::{Route, RouteDefaults};

/// A declaratively defined route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRoute {
    pub name: Option<String>,
    pub template: String,
    pub defaults: RouteDefaults,
}

impl AttributeRoute {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            name: None,
            template: template.into(),
            defaults: RouteDefaults::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_defaults(mut self, defaults: RouteDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Table key: the route name, or the template text for unnamed routes.
    pub fn key(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.template)
    }

    pub fn to_route(&self) -> Result<Route, HarnessError> {
        Route::new(&self.template, self.defaults.clone())
    }
}

/// Anything that can enumerate attribute routes.
pub trait AttributeRouteSource {
    fn attribute_routes(&self) -> Vec<AttributeRoute>;
}

impl AttributeRouteSource for [AttributeRoute] {
    fn attribute_routes(&self) -> Vec<AttributeRoute> {
        self.to_vec()
    }
}

impl AttributeRouteSource for Vec<AttributeRoute> {
    fn attribute_routes(&self) -> Vec<AttributeRoute> {
        self.clone()
    }
}

impl<const N: usize> AttributeRouteSource for [AttributeRoute; N] {
    fn attribute_routes(&self) -> Vec<AttributeRoute> {
        self.to_vec()
    }
}
