//! Executors that turn an `HttpRequest` into an `HttpResponse`.
//!
//! # Design
//! This is the only module that performs I/O. Each call acquires its own
//! transport (a ureq agent or a reqwest client) configured from the
//! request's timeout and redirect policy, executes one round trip and drops
//! it. Status codes are never treated as errors here; interpreting them is
//! the response parser's job. Network failures are returned unchanged inside
//! `ApiError::Transport` / `ApiError::AsyncTransport`.

use tracing::debug;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Redirect hop limit when redirects are enabled.
const MAX_REDIRECTS: u32 = 10;

/// Execute `request` on the calling thread.
pub fn execute_blocking(request: &HttpRequest, verify_ssl: bool) -> Result<HttpResponse> {
    let tls = ureq::tls::TlsConfig::builder()
        .disable_verification(!verify_ssl)
        .build();
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(request.timeout)
        .max_redirects(if request.follow_redirects { MAX_REDIRECTS } else { 0 })
        .max_redirects_will_error(false)
        .tls_config(tls)
        .build()
        .new_agent();

    debug!(method = %request.method, url = %request.url, "sending blocking request");

    let url = request.url.as_str();
    let body = request.body.as_deref().map(str::as_bytes);
    let result = match request.method {
        HttpMethod::Get => with_headers(agent.get(url), request).call(),
        HttpMethod::Post => {
            let builder = with_headers(agent.post(url), request);
            match body {
                Some(body) => builder.send(body),
                None => builder.send_empty(),
            }
        }
    };
    let mut response = result?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    // ureq caps read_to_vec at 10 MiB by default; pipeline configs can exceed it.
    let body = response.body_mut().with_config().limit(u64::MAX).read_to_vec()?;

    debug!(status, bytes = body.len(), "received blocking response");
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(cookie) = request.cookie_header() {
        builder = builder.header("cookie", cookie.as_str());
    }
    builder
}

/// Execute `request` asynchronously. Must be polled inside a tokio runtime.
pub async fn execute(request: &HttpRequest, verify_ssl: bool) -> Result<HttpResponse> {
    let redirect = if request.follow_redirects {
        reqwest::redirect::Policy::limited(MAX_REDIRECTS as usize)
    } else {
        reqwest::redirect::Policy::none()
    };
    let mut client = reqwest::Client::builder()
        .redirect(redirect)
        .danger_accept_invalid_certs(!verify_ssl);
    if let Some(timeout) = request.timeout {
        client = client.timeout(timeout);
    }
    let client = client.build()?;

    let method = match request.method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
    };
    let mut builder = client.request(method, request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(cookie) = request.cookie_header() {
        builder = builder.header(reqwest::header::COOKIE, cookie);
    }
    if let Some(body) = &request.body {
        builder = builder.body(body.clone());
    }

    debug!(method = %request.method, url = %request.url, "sending request");
    let response = builder.send().await?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response.bytes().await?.to_vec();

    debug!(status, bytes = body.len(), "received response");
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
