//! The request harness.
//!
//! # Responsibilities
//! - Collect routes during test setup
//! - Build a synthetic `GET` per call and resolve its route data
//! - Dispatch through the handler under test and capture the response
//! - Offer body/header convenience readers
//!
//! # Design Decisions
//! - Two phases: configuration (routes may change) then dispatch (routes are read)
//! - Configuration is copy-on-write; each request sees an immutable snapshot
//! - Blocking entry points refuse to run inside a Tokio runtime; use `get_async` there

use std::sync::Arc;

use axum::body::{Body, Bytes, HttpBody};
use axum::http::{HeaderMap, Request, Response, Uri};
use axum::BoxError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tower::Service;
use tracing::Instrument;
use url::Url;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::harness::blocking::BlockingInvoker;
use crate::harness::dispatch::dispatch;
use crate::host::HostConfiguration;
use crate::http::{CapturedResponse, SyntheticRequest};
use crate::routing::{AttributeRouteSource, ControllerDescriptor, Route, RouteData, RouteDefaults};

/// Well-known URIs of the documentation endpoints.
pub mod temp_uri {
    pub const DOCS: &str = "http://tempuri.org/swagger/docs/v1";
    pub const INDEX: &str = "http://tempuri.org/swagger/ui/index";
}

/// Dispatches synthetic requests through a handler under test.
///
/// A harness used through the blocking entry points may still be dropped
/// inside an async test; its private runtime is shut down in the background.
pub struct RequestHarness<H> {
    fallback: Route,
    base_uri: Url,
    configuration: Arc<HostConfiguration>,
    handler: Option<H>,
    invoker: BlockingInvoker,
}

impl<H> RequestHarness<H> {
    /// Create a harness whose fallback route uses `route_template`.
    pub fn new(route_template: &str) -> Result<Self, HarnessError> {
        Self::build(route_template, "http://tempuri.org")
    }

    pub fn from_config(config: &HarnessConfig) -> Result<Self, HarnessError> {
        Self::build(&config.harness.route_template, &config.harness.base_uri)
    }

    fn build(route_template: &str, base_uri: &str) -> Result<Self, HarnessError> {
        let base_uri = Url::parse(base_uri).map_err(|source| HarnessError::InvalidUri {
            uri: base_uri.to_string(),
            source,
        })?;

        Ok(Self {
            fallback: Route::new(route_template, RouteDefaults::new())?,
            base_uri,
            configuration: Arc::new(HostConfiguration::new()),
            handler: None,
            invoker: BlockingInvoker::new(),
        })
    }

    pub fn with_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn set_handler(&mut self, handler: H) {
        self.handler = Some(handler);
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    pub fn configuration(&self) -> &HostConfiguration {
        &self.configuration
    }

    pub fn route_template(&self) -> &str {
        self.fallback.template().as_str()
    }

    /// Start over with an empty configuration. The handler is kept.
    pub fn reset(&mut self) {
        self.configuration = Arc::new(HostConfiguration::new());
    }

    /// Register a default `{resource}/{id?}` route for each descriptor.
    pub fn configure<I>(&mut self, descriptors: I) -> Result<(), HarnessError>
    where
        I: IntoIterator,
        I::Item: Into<ControllerDescriptor>,
    {
        for descriptor in descriptors {
            let descriptor = descriptor.into();
            let route = descriptor.route()?;
            self.configuration_mut().add_route(descriptor.resource_name(), route)?;
        }
        Ok(())
    }

    /// Register the default route for a single descriptor.
    pub fn configure_route_for(
        &mut self,
        descriptor: impl Into<ControllerDescriptor>,
    ) -> Result<(), HarnessError> {
        self.configure([descriptor.into()])
    }

    /// Register a descriptor under an explicit template, replacing any prior entry.
    pub fn configure_custom_route(
        &mut self,
        descriptor: impl Into<ControllerDescriptor>,
        template: &str,
    ) -> Result<(), HarnessError> {
        let descriptor = descriptor.into();
        let route = descriptor.custom_route(template)?;
        self.configuration_mut().add_route(descriptor.resource_name(), route)
    }

    /// Map attribute routes from `source`, then lock the configuration.
    pub fn configure_attribute_routes<S>(&mut self, source: &S) -> Result<usize, HarnessError>
    where
        S: AttributeRouteSource + ?Sized,
    {
        let configuration = self.configuration_mut();
        let count = configuration.map_attribute_routes(source)?;
        configuration.ensure_initialized();
        Ok(count)
    }

    /// Route data for a path: fallback route, then the route table, then unmatched.
    pub fn resolve_route_data(&self, path: &str) -> RouteData {
        self.fallback
            .route_data(path)
            .or_else(|| self.configuration.resolve(path))
            .unwrap_or_else(|| RouteData::unmatched(&self.fallback))
    }

    fn configuration_mut(&mut self) -> &mut HostConfiguration {
        Arc::make_mut(&mut self.configuration)
    }

    fn resolve_uri(&self, uri: &str) -> Result<Uri, HarnessError> {
        let url = self
            .base_uri
            .join(uri)
            .map_err(|source| HarnessError::InvalidUri {
                uri: uri.to_string(),
                source,
            })?;
        url.as_str()
            .parse::<Uri>()
            .map_err(|e| HarnessError::Request(e.into()))
    }
}

impl<H, B> RequestHarness<H>
where
    H: Service<Request<Body>, Response = Response<B>> + Clone,
    H::Error: Into<BoxError>,
    B: HttpBody<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    /// Dispatch a `GET` and wait for the response.
    pub fn get(
        &self,
        uri: &str,
        if_modified_since: Option<DateTime<Utc>>,
    ) -> Result<CapturedResponse, HarnessError> {
        // Checked before the runtime so a missing handler is always reported as such
        if self.handler.is_none() {
            return Err(HarnessError::HandlerNotSet);
        }
        self.invoker.block_on(self.get_async(uri, if_modified_since))?
    }

    /// Async twin of [`get`](Self::get) for callers already inside a runtime.
    pub async fn get_async(
        &self,
        uri: &str,
        if_modified_since: Option<DateTime<Utc>>,
    ) -> Result<CapturedResponse, HarnessError> {
        let handler = self.handler.clone().ok_or(HarnessError::HandlerNotSet)?;

        let uri = self.resolve_uri(uri)?;
        let route_data = self.resolve_route_data(uri.path());
        let synthetic = SyntheticRequest::get(uri).if_modified_since(if_modified_since);
        let request_id = synthetic.request_id;

        let span = tracing::debug_span!(
            "dispatch",
            request_id = %request_id,
            path = %synthetic.uri.path()
        );

        async move {
            tracing::debug!(
                route = ?route_data.route_name,
                template = %route_data.template,
                matched = route_data.matched,
                conditional = synthetic.if_modified_since.is_some(),
                "Dispatching request"
            );

            let request = synthetic.into_http(Arc::clone(&self.configuration), route_data)?;
            match dispatch(handler, request).await {
                Ok(response) => {
                    tracing::debug!(status = %response.status(), bytes = response.body().len(), "Handler responded");
                    Ok(response)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Dispatch failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Dispatch and deserialize the JSON body.
    pub fn get_content<T: DeserializeOwned>(&self, uri: &str) -> Result<T, HarnessError> {
        self.get(uri, None)?.json()
    }

    pub fn get_headers(&self, uri: &str) -> Result<HeaderMap, HarnessError> {
        Ok(self.get(uri, None)?.into_headers())
    }

    /// Dispatch and read the body as text.
    ///
    /// Never fails: any error is returned as its description in place of the
    /// body. Use [`try_get_content_as_string`](Self::try_get_content_as_string)
    /// to tell the two apart.
    pub fn get_content_as_string(&self, uri: &str) -> String {
        self.try_get_content_as_string(uri)
            .unwrap_or_else(|e| e.to_string())
    }

    pub fn try_get_content_as_string(&self, uri: &str) -> Result<String, HarnessError> {
        self.get(uri, None)?.text()
    }
}

impl<H> std::fmt::Debug for RequestHarness<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHarness")
            .field("route_template", &self.route_template())
            .field("base_uri", &self.base_uri.as_str())
            .field("routes", &self.configuration.routes().len())
            .field("handler_set", &self.handler.is_some())
            .finish()
    }
}
