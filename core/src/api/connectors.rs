use crate::client::PipelineClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Response};
use crate::models::{Model, NewConnectorRequest, NewConnectorResponse};

impl PipelineClient {
    /// `POST {base_url}/v0/connectors`
    pub fn build_new_connector(&self, body: &NewConnectorRequest) -> Result<HttpRequest> {
        let body = Self::encode_body(body)?;
        let url = format!("{}/v0/connectors", self.config().base_url);
        Ok(self.request(HttpMethod::Post, url, Some(body)))
    }

    /// 200 decodes to `NewConnectorResponse`; nothing else is documented.
    pub fn parse_new_connector(&self, response: HttpResponse) -> Result<Response<NewConnectorResponse>> {
        self.envelope(response, |status, body| match status {
            200 => Some(NewConnectorResponse::from_slice(body)),
            _ => None,
        })
    }

    /// Create a new connector configuration.
    pub fn new_connector_detailed_blocking(
        &self,
        body: &NewConnectorRequest,
    ) -> Result<Response<NewConnectorResponse>> {
        let request = self.build_new_connector(body)?;
        self.parse_new_connector(self.send_blocking(&request)?)
    }

    pub fn new_connector_blocking(&self, body: &NewConnectorRequest) -> Result<Option<NewConnectorResponse>> {
        Ok(self.new_connector_detailed_blocking(body)?.parsed)
    }

    pub async fn new_connector_detailed(
        &self,
        body: &NewConnectorRequest,
    ) -> Result<Response<NewConnectorResponse>> {
        let request = self.build_new_connector(body)?;
        self.parse_new_connector(self.send(&request).await?)
    }

    pub async fn new_connector(&self, body: &NewConnectorRequest) -> Result<Option<NewConnectorResponse>> {
        Ok(self.new_connector_detailed(body).await?.parsed)
    }
}
