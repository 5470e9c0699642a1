//! Request and response plumbing for in-memory dispatch.
//!
//! # Data Flow
//! ```text
//! path + optional If-Modified-Since
//!     → request.rs (SyntheticRequest → http::Request<Body> with extensions)
//!     → [handler under test]
//!     → response.rs (collect body → CapturedResponse)
//!     → assertions (status, headers, text, JSON)
//! ```

pub mod request;
pub mod response;

pub use request::{http_date, HarnessRequestExt, RequestId, SyntheticRequest, X_REQUEST_ID};
pub use response::CapturedResponse;
