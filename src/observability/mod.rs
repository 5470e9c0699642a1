//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / host / harness
//!     → tracing events (route registration, dispatch, failures)
//!     → logging.rs (EnvFilter + fmt layer, test writer)
//! ```
//!
//! # Design Decisions
//! - Every dispatch runs inside a span carrying the request ID
//! - Logging is opt-in: nothing is installed unless `init_logging` is called

pub mod logging;

pub use logging::init_logging;
