//! Stateless request builder and response parser shared by every endpoint.
//!
//! # Design
//! `PipelineClient` holds only an `Arc<ClientConfig>` and carries no mutable
//! state between calls, so one instance can be cloned into any number of
//! threads or tasks. Each endpoint (see `crate::api`) is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the four call shapes per endpoint only
//! differ in which transport runs between the two and in how much of the
//! envelope they return.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Response};
use crate::models::Model;
use crate::transport;

/// Client for the pipeline-manager API.
#[derive(Debug, Clone)]
pub struct PipelineClient {
    config: Arc<ClientConfig>,
}

impl PipelineClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Shorthand for a client with default settings.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ClientConfig::new(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a path templated relative to the base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Assemble a request carrying the configured headers, credential,
    /// cookies, timeout and redirect policy.
    pub(crate) fn request(&self, method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
        let mut headers = self.config.request_headers();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            url,
            headers,
            cookies: self.config.cookies.clone(),
            timeout: self.config.timeout,
            follow_redirects: self.config.follow_redirects,
            body,
        }
    }

    pub(crate) fn encode_body<M: Model>(body: &M) -> Result<String> {
        serde_json::to_string(&Value::Object(body.to_map()))
            .map_err(|e| ApiError::SerializationError(e.to_string()))
    }

    /// Wrap `response` in a typed envelope.
    ///
    /// `decode` returns `None` for statuses the endpoint does not document.
    /// Those fail with `UnexpectedStatus` when the client is configured to
    /// raise, and otherwise produce an envelope with `parsed: None`.
    pub(crate) fn envelope<T, F>(&self, response: HttpResponse, decode: F) -> Result<Response<T>>
    where
        F: FnOnce(u16, &[u8]) -> Option<Result<T>>,
    {
        let parsed = match decode(response.status, &response.body) {
            Some(parsed) => Some(parsed?),
            None if self.config.raise_on_unexpected_status => {
                warn!(status = response.status, "undocumented response status");
                return Err(ApiError::unexpected_status(response.status, response.body));
            }
            None => {
                debug!(status = response.status, "undocumented response status, leaving payload unparsed");
                None
            }
        };
        Ok(Response {
            status: response.status,
            headers: response.headers,
            content: response.body,
            parsed,
        })
    }

    pub(crate) fn send_blocking(&self, request: &HttpRequest) -> Result<HttpResponse> {
        transport::execute_blocking(request, self.config.verify_ssl)
    }

    pub(crate) async fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        transport::execute(request, self.config.verify_ssl).await
    }
}
