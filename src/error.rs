//! Error taxonomy for the harness.
//!
//! # Design Decisions
//! - Usage errors (`HandlerNotSet`, `NestedRuntime`, `ConfigurationLocked`) fail fast
//! - A routing miss is never an error; see `RouteData::unmatched`
//! - Handler failures keep their original error as the source

use axum::BoxError;

/// Errors raised while configuring routes or dispatching a request.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("handler must be set by the fixture before dispatching requests")]
    HandlerNotSet,

    #[error("blocking dispatch called from inside a Tokio runtime; use get_async instead")]
    NestedRuntime,

    #[error("host configuration is initialized; route `{0}` was rejected")]
    ConfigurationLocked(String),

    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("invalid request uri `{uri}`: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("handler failed: {0}")]
    Handler(#[source] BoxError),

    #[error("handler panicked: {0}")]
    HandlerPanicked(String),

    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to deserialize response body: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("failed to start the blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl HarnessError {
    pub(crate) fn invalid_template(template: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}
