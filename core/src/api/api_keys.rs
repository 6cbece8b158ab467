use crate::client::PipelineClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Response};
use crate::models::{ErrorResponse, Model, NewApiKeyRequest, NewApiKeyResponse};

/// Documented outcomes of issuing an API key.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateApiKeyResponse {
    /// 201
    Created(NewApiKeyResponse),
    /// 409: a key with this name already exists.
    Conflict(ErrorResponse),
}

impl PipelineClient {
    /// `POST /v0/api_keys`
    pub fn build_create_api_key(&self, body: &NewApiKeyRequest) -> Result<HttpRequest> {
        let body = Self::encode_body(body)?;
        Ok(self.request(HttpMethod::Post, self.endpoint_url("/v0/api_keys"), Some(body)))
    }

    pub fn parse_create_api_key(&self, response: HttpResponse) -> Result<Response<CreateApiKeyResponse>> {
        self.envelope(response, |status, body| match status {
            201 => Some(NewApiKeyResponse::from_slice(body).map(CreateApiKeyResponse::Created)),
            409 => Some(ErrorResponse::from_slice(body).map(CreateApiKeyResponse::Conflict)),
            _ => None,
        })
    }

    /// Issue a new API key. The key itself is returned only once.
    pub fn create_api_key_detailed_blocking(
        &self,
        body: &NewApiKeyRequest,
    ) -> Result<Response<CreateApiKeyResponse>> {
        let request = self.build_create_api_key(body)?;
        self.parse_create_api_key(self.send_blocking(&request)?)
    }

    pub fn create_api_key_blocking(&self, body: &NewApiKeyRequest) -> Result<Option<CreateApiKeyResponse>> {
        Ok(self.create_api_key_detailed_blocking(body)?.parsed)
    }

    pub async fn create_api_key_detailed(
        &self,
        body: &NewApiKeyRequest,
    ) -> Result<Response<CreateApiKeyResponse>> {
        let request = self.build_create_api_key(body)?;
        self.parse_create_api_key(self.send(&request).await?)
    }

    pub async fn create_api_key(&self, body: &NewApiKeyRequest) -> Result<Option<CreateApiKeyResponse>> {
        Ok(self.create_api_key_detailed(body).await?.parsed)
    }
}
