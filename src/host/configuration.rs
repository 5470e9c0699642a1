//! In-memory hosting configuration.
//!
//! # Responsibilities
//! - Own the named route table handlers see
//! - Accept route registrations until initialized
//! - Map attribute routes from an explicit source
//!
//! # Design Decisions
//! - Initialization is one-way; later registrations fail with `ConfigurationLocked`
//! - Cloned on write by the harness; requests carry an `Arc` snapshot

use crate::error::HarnessError;
use crate::routing::{AttributeRouteSource, Route, RouteData, RouteTable};

#[derive(Debug, Clone, Default)]
pub struct HostConfiguration {
    routes: RouteTable,
    attribute_routes_mapped: bool,
    initialized: bool,
}

impl HostConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn attribute_routes_mapped(&self) -> bool {
        self.attribute_routes_mapped
    }

    /// Register a named route, replacing any route with the same name.
    pub fn add_route(&mut self, name: impl Into<String>, route: Route) -> Result<(), HarnessError> {
        let name = name.into();
        if self.initialized {
            tracing::warn!(route = %name, "Route registration after initialization rejected");
            return Err(HarnessError::ConfigurationLocked(name));
        }

        tracing::debug!(route = %name, template = %route.template(), "Route registered");
        if self.routes.insert(name.clone(), route).is_some() {
            tracing::debug!(route = %name, "Replaced existing route");
        }
        Ok(())
    }

    /// Register every route the source yields.
    ///
    /// All templates are parsed before anything is inserted, so a bad template
    /// leaves the table untouched.
    pub fn map_attribute_routes<S>(&mut self, source: &S) -> Result<usize, HarnessError>
    where
        S: AttributeRouteSource + ?Sized,
    {
        if self.initialized {
            return Err(HarnessError::ConfigurationLocked("attribute routes".to_string()));
        }

        let parsed = source
            .attribute_routes()
            .into_iter()
            .map(|attr| attr.to_route().map(|route| (attr.key().to_string(), route)))
            .collect::<Result<Vec<_>, _>>()?;

        let count = parsed.len();
        for (name, route) in parsed {
            self.add_route(name, route)?;
        }
        self.attribute_routes_mapped = true;

        tracing::info!(count, "Attribute routes mapped");
        Ok(count)
    }

    /// Lock the configuration. Idempotent.
    pub fn ensure_initialized(&mut self) {
        if !self.initialized {
            self.initialized = true;
            tracing::debug!(routes = self.routes.len(), "Host configuration initialized");
        }
    }

    /// First registered route matching the path.
    pub fn resolve(&self, path: &str) -> Option<RouteData> {
        self.routes.match_path(path)
    }
}
