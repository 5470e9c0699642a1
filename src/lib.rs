//! In-memory request harness for HTTP handlers under test.
//!
//! Builds a route table from controller descriptors, dispatches synthetic
//! `GET` requests through any `tower::Service` handler, and captures the
//! response for assertions.

pub mod config;
pub mod error;
pub mod harness;
pub mod host;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use harness::{temp_uri, RequestHarness};
pub use host::HostConfiguration;
pub use http::{CapturedResponse, HarnessRequestExt};
pub use routing::{AttributeRoute, ControllerDescriptor, RouteData};
