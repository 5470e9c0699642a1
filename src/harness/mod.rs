//! Request harness subsystem.
//!
//! # Data Flow
//! ```text
//! test setup
//!     → fixture.rs (configure / configure_custom_route / configure_attribute_routes)
//!
//! test body: get(uri, if_modified_since)
//!     → fixture.rs (resolve URI, resolve route data, build SyntheticRequest)
//!     → blocking.rs (run to completion on a current-thread runtime)
//!     → dispatch.rs (oneshot through the handler, catch panics, buffer body)
//!     → CapturedResponse / content / headers / text
//! ```

pub mod blocking;
pub mod dispatch;
pub mod fixture;

pub use blocking::BlockingInvoker;
pub use dispatch::dispatch;
pub use fixture::{temp_uri, RequestHarness};
