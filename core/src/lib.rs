//! Typed client for the pipeline-manager HTTP API.
//!
//! # Overview
//! Covers connector creation, pipeline configuration retrieval and API-key
//! issuance, plus [`SqlSchema`] for rendering `CREATE TABLE` statements.
//!
//! # Design
//! - `PipelineClient` is stateless apart from its shared, read-only
//!   `ClientConfig`; clone it freely across threads and tasks.
//! - Each endpoint is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`). The blocking (ureq) and async
//!   (reqwest) call shapes are thin wrappers around that pair.
//! - Documented statuses decode into typed variants, including documented
//!   errors such as 404. Undocumented statuses either fail with
//!   `ApiError::UnexpectedStatus` or yield an envelope with `parsed: None`,
//!   depending on `ClientConfig::raise_on_unexpected_status`.
//! - DTOs keep unknown JSON keys in an ordered extras bag so newer server
//!   payloads survive a decode/encode round trip.
//!
//! ```no_run
//! use pipeline_client::{ClientConfig, GetPipelineConfigResponse, PipelineClient};
//!
//! # fn main() -> pipeline_client::Result<()> {
//! let client = PipelineClient::new(
//!     ClientConfig::builder("http://localhost:8080").token("apikey:...").build(),
//! );
//! match client.get_pipeline_config_blocking("my-pipeline")? {
//!     Some(GetPipelineConfigResponse::Ok(config)) => println!("{} inputs", config.inputs.len()),
//!     Some(GetPipelineConfigResponse::NotFound(err)) => println!("{}", err.message),
//!     None => println!("unexpected status"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod sql;
pub mod transport;

pub use api::{CreateApiKeyResponse, GetPipelineConfigResponse};
pub use client::PipelineClient;
pub use config::{ClientConfig, Credential};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Response};
pub use models::{
    ConnectorConfig, ErrorResponse, FormatConfig, Model, NewApiKeyRequest, NewApiKeyResponse,
    NewConnectorRequest, NewConnectorResponse, PipelineConfig, TransportConfig,
};
pub use sql::SqlSchema;
