//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Base URI must be an absolute http(s) URL
//! - Fallback route template must parse
//! - Log level must be known
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HarnessConfig → Result<(), Vec<ValidationError>>

use url::Url;

use crate::config::schema::HarnessConfig;
use crate::routing::RouteTemplate;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("base_uri `{0}` is not an absolute URL")]
    InvalidBaseUri(String),

    #[error("base_uri `{0}` must use http or https")]
    UnsupportedScheme(String),

    #[error("route_template: {0}")]
    InvalidRouteTemplate(String),

    #[error("log_level `{0}` is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

pub fn validate_config(config: &HarnessConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.harness.base_uri) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(_) => errors.push(ValidationError::UnsupportedScheme(config.harness.base_uri.clone())),
        Err(_) => errors.push(ValidationError::InvalidBaseUri(config.harness.base_uri.clone())),
    }

    if let Err(e) = RouteTemplate::parse(&config.harness.route_template) {
        errors.push(ValidationError::InvalidRouteTemplate(e.to_string()));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
