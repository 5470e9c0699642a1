//! Synthetic request construction.
//!
//! # Responsibilities
//! - Build a fresh `GET` request per dispatch
//! - Attach the conditional `If-Modified-Since` header when asked
//! - Generate a request ID for log correlation
//! - Carry the host configuration and route data as extensions
//!
//! # Design Decisions
//! - Requests are never reused between dispatches
//! - Timestamps are formatted as IMF-fixdate in UTC

use std::fmt;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Uri};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::HarnessError;
use crate::host::HostConfiguration;
use crate::routing::RouteData;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Unique identifier attached to each synthetic request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Format a timestamp as an HTTP date, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// A request built by the harness.
#[derive(Debug, Clone)]
pub struct SyntheticRequest {
    pub method: Method,
    pub uri: Uri,
    pub if_modified_since: Option<DateTime<Utc>>,
    pub request_id: RequestId,
}

impl SyntheticRequest {
    /// A retrieval request for the given URI.
    pub fn get(uri: Uri) -> Self {
        Self {
            method: Method::GET,
            uri,
            if_modified_since: None,
            request_id: RequestId::new(),
        }
    }

    pub fn if_modified_since(mut self, timestamp: Option<DateTime<Utc>>) -> Self {
        self.if_modified_since = timestamp;
        self
    }

    /// Build the HTTP request with configuration and route data attached.
    pub fn into_http(
        self,
        configuration: Arc<HostConfiguration>,
        route_data: RouteData,
    ) -> Result<Request<Body>, HarnessError> {
        let mut builder = Request::builder()
            .method(self.method)
            .uri(self.uri)
            .header(X_REQUEST_ID, self.request_id.to_string());

        if let Some(timestamp) = self.if_modified_since {
            builder = builder.header(header::IF_MODIFIED_SINCE, http_date(&timestamp));
        }

        let mut request = builder.body(Body::empty())?;
        let extensions = request.extensions_mut();
        extensions.insert(configuration);
        extensions.insert(route_data);
        extensions.insert(self.request_id);
        Ok(request)
    }
}

/// Accessors for the context the harness attaches to each request.
pub trait HarnessRequestExt {
    fn host_configuration(&self) -> Option<&HostConfiguration>;
    fn route_data(&self) -> Option<&RouteData>;
    fn request_id(&self) -> Option<RequestId>;
    fn if_modified_since(&self) -> Option<DateTime<Utc>>;
}

impl<B> HarnessRequestExt for Request<B> {
    fn host_configuration(&self) -> Option<&HostConfiguration> {
        self.extensions()
            .get::<Arc<HostConfiguration>>()
            .map(|c| c.as_ref())
    }

    fn route_data(&self) -> Option<&RouteData> {
        self.extensions().get::<RouteData>()
    }

    fn request_id(&self) -> Option<RequestId> {
        self.extensions().get::<RequestId>().copied()
    }

    fn if_modified_since(&self) -> Option<DateTime<Utc>> {
        self.headers()
            .get(header::IF_MODIFIED_SINCE)
            .and_then(|v: &HeaderValue| v.to_str().ok())
            .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}
