//! Single-request dispatch through a handler under test.
//!
//! # Responsibilities
//! - Send one request through a `tower::Service`
//! - Turn handler errors and panics into `HarnessError`
//! - Buffer the response for assertions
//!
//! # Design Decisions
//! - The handler is cloned per request and consumed with `oneshot`
//! - No cancellation, retry, or timeout

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::body::{Body, Bytes, HttpBody};
use axum::http::{Request, Response};
use axum::BoxError;
use futures_util::FutureExt;
use tower::{Service, ServiceExt};

use crate::error::HarnessError;
use crate::http::CapturedResponse;

/// Dispatch a request and capture the response.
pub async fn dispatch<H, B>(handler: H, request: Request<Body>) -> Result<CapturedResponse, HarnessError>
where
    H: Service<Request<Body>, Response = Response<B>>,
    H::Error: Into<BoxError>,
    B: HttpBody<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let outcome = AssertUnwindSafe(async move {
        let response = handler
            .oneshot(request)
            .await
            .map_err(|e| HarnessError::Handler(e.into()))?;
        CapturedResponse::collect(response).await
    })
    .catch_unwind()
    .await;

    match outcome {
        Ok(result) => result,
        Err(payload) => Err(HarnessError::HandlerPanicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
