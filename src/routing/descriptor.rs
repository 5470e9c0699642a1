//! Controller descriptors.
//!
//! A descriptor names a controller explicitly; the resource name and the
//! default route are derived from that name.

use crate::error::HarnessError;
use crate::routing::route::{Route, RouteDefaults};

const CONTROLLER_SUFFIX: &str = "controller";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDescriptor {
    name: String,
    template: Option<String>,
}

impl ControllerDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: None,
        }
    }

    /// Use an explicit template instead of `{resource}/{id?}`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased name with a trailing `controller` removed.
    ///
    /// Names without the suffix, or made only of it, keep the full lower-cased name.
    pub fn resource_name(&self) -> String {
        let lowered = self.name.to_lowercase();
        match lowered.strip_suffix(CONTROLLER_SUFFIX) {
            Some(stripped) if !stripped.is_empty() => stripped.to_string(),
            _ => lowered,
        }
    }

    pub fn default_template(&self) -> String {
        format!("{}/{{id?}}", self.resource_name())
    }

    /// The template this descriptor registers under.
    pub fn template(&self) -> String {
        self.template.clone().unwrap_or_else(|| self.default_template())
    }

    /// Defaults shared by default and custom routes.
    pub fn defaults(&self) -> RouteDefaults {
        RouteDefaults::new()
            .with_value("controller", self.resource_name())
            .with_optional("id")
    }

    pub fn route(&self) -> Result<Route, HarnessError> {
        Route::new(&self.template(), self.defaults())
    }

    pub fn custom_route(&self, template: &str) -> Result<Route, HarnessError> {
        Route::new(template, self.defaults())
    }
}

impl From<&str> for ControllerDescriptor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ControllerDescriptor {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
