use crate::client::PipelineClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Response};
use crate::models::{ErrorResponse, Model, PipelineConfig};

/// Documented outcomes of fetching a pipeline's configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum GetPipelineConfigResponse {
    /// 200
    Ok(PipelineConfig),
    /// 404: the pipeline does not exist.
    NotFound(ErrorResponse),
}

impl PipelineClient {
    /// `GET /pipelines/{pipeline_id}/config`
    ///
    /// `pipeline_id` is percent-encoded as a single path segment, so `/`,
    /// `?`, `#` and spaces cannot change the route; `a/b c` is sent as
    /// `a%2Fb%20c`.
    pub fn build_get_pipeline_config(&self, pipeline_id: &str) -> HttpRequest {
        let path = format!("/pipelines/{}/config", urlencoding::encode(pipeline_id));
        self.request(HttpMethod::Get, self.endpoint_url(&path), None)
    }

    pub fn parse_get_pipeline_config(
        &self,
        response: HttpResponse,
    ) -> Result<Response<GetPipelineConfigResponse>> {
        self.envelope(response, |status, body| match status {
            200 => Some(PipelineConfig::from_slice(body).map(GetPipelineConfigResponse::Ok)),
            404 => Some(ErrorResponse::from_slice(body).map(GetPipelineConfigResponse::NotFound)),
            _ => None,
        })
    }

    /// Fetch a pipeline's expanded configuration: its runtime settings and
    /// the complete definitions of the connectors attached to it.
    pub fn get_pipeline_config_detailed_blocking(
        &self,
        pipeline_id: &str,
    ) -> Result<Response<GetPipelineConfigResponse>> {
        let request = self.build_get_pipeline_config(pipeline_id);
        self.parse_get_pipeline_config(self.send_blocking(&request)?)
    }

    pub fn get_pipeline_config_blocking(
        &self,
        pipeline_id: &str,
    ) -> Result<Option<GetPipelineConfigResponse>> {
        Ok(self.get_pipeline_config_detailed_blocking(pipeline_id)?.parsed)
    }

    pub async fn get_pipeline_config_detailed(
        &self,
        pipeline_id: &str,
    ) -> Result<Response<GetPipelineConfigResponse>> {
        let request = self.build_get_pipeline_config(pipeline_id);
        self.parse_get_pipeline_config(self.send(&request).await?)
    }

    pub async fn get_pipeline_config(
        &self,
        pipeline_id: &str,
    ) -> Result<Option<GetPipelineConfigResponse>> {
        Ok(self.get_pipeline_config_detailed(pipeline_id).await?.parsed)
    }
}
