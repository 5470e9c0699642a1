//! Shared handlers for integration tests.
#![allow(dead_code)]

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::Extension,
    http::{header, HeaderMap, Request, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, TimeZone, Utc};
use handler_harness::config::ObservabilityConfig;
use handler_harness::observability::init_logging;
use handler_harness::{HarnessRequestExt, HostConfiguration, RouteData};
use serde::{Deserialize, Serialize};
use tower::service_fn;

/// Document body returned by the docs router.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DocsPayload {
    pub swagger: String,
    pub api_version: Option<String>,
    pub route_template: String,
    pub route_matched: bool,
    pub route_values: Vec<(String, String)>,
    pub controllers: Vec<String>,
}

/// Route harness tracing output through the test writer. Idempotent.
pub fn init_test_logging() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
    };
    init_logging(&config);
}

pub fn last_modified() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A small documentation endpoint that reports what the harness attached.
pub fn docs_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/swagger/docs/{apiVersion}", get(docs))
        .route("/swagger/ui/index", get(index))
        .route("/widgets/{id}", get(docs))
}

async fn root(Extension(route): Extension<RouteData>) -> impl IntoResponse {
    Json(route)
}

async fn docs(
    Extension(route): Extension<RouteData>,
    Extension(config): Extension<Arc<HostConfiguration>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let since = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| DateTime::parse_from_rfc2822(s).ok());

    if let Some(since) = since {
        if since.with_timezone(&Utc) >= last_modified() {
            return StatusCode::NOT_MODIFIED.into_response();
        }
    }

    let payload = DocsPayload {
        swagger: "2.0".to_string(),
        api_version: route.get("apiVersion").map(str::to_string),
        route_template: route.template.clone(),
        route_matched: route.matched,
        route_values: route.values.clone().into_iter().collect(),
        controllers: config.routes().names().map(str::to_string).collect(),
    };

    (
        [
            (header::CACHE_CONTROL, "max-age=60"),
            (header::LAST_MODIFIED, "Mon, 01 Jan 2024 00:00:00 GMT"),
        ],
        Json(payload),
    )
        .into_response()
}

async fn index() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html")], "<html>swagger ui</html>")
}

/// Handler that reports the route data through the request extension accessors.
pub type ServiceFnHandler =
    tower::util::ServiceFn<fn(Request<Body>) -> std::future::Ready<Result<Response<Body>, Infallible>>>;

pub fn route_echo() -> ServiceFnHandler {
    fn echo(req: Request<Body>) -> std::future::Ready<Result<Response<Body>, Infallible>> {
        let body = match req.route_data() {
            Some(route) => serde_json::to_string(route).unwrap_or_default(),
            None => String::new(),
        };
        std::future::ready(Ok(Response::new(Body::from(body))))
    }
    service_fn(echo as fn(_) -> _)
}

/// Handler whose every call fails.
pub type FailingHandler =
    tower::util::ServiceFn<fn(Request<Body>) -> std::future::Ready<Result<Response<Body>, std::io::Error>>>;

pub fn failing() -> FailingHandler {
    fn fail(_req: Request<Body>) -> std::future::Ready<Result<Response<Body>, std::io::Error>> {
        std::future::ready(Err(std::io::Error::other("backend unavailable")))
    }
    service_fn(fail as fn(_) -> _)
}

/// Handler that panics.
pub fn panicking() -> ServiceFnHandler {
    fn explode(_req: Request<Body>) -> std::future::Ready<Result<Response<Body>, Infallible>> {
        panic!("document generator exploded")
    }
    service_fn(explode as fn(_) -> _)
}
