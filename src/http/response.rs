//! Captured handler responses.
//!
//! # Responsibilities
//! - Buffer the whole response body once
//! - Expose status and headers for assertions
//! - Read the body as text or deserialize it as JSON

use axum::body::{Bytes, HttpBody};
use axum::http::{HeaderMap, Response, StatusCode, Version};
use axum::BoxError;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

use crate::error::HarnessError;

#[derive(Debug, Clone)]
pub struct CapturedResponse {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
}

impl CapturedResponse {
    /// Collect a streamed response into memory.
    pub async fn collect<B>(response: Response<B>) -> Result<Self, HarnessError>
    where
        B: HttpBody<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| HarnessError::Body(e.into()))?
            .to_bytes();

        Ok(Self {
            status: parts.status,
            version: parts.version,
            headers: parts.headers,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn text(&self) -> Result<String, HarnessError> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HarnessError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
