//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use pipeline_client::{
    CreateApiKeyResponse, GetPipelineConfigResponse, HttpMethod, HttpRequest, HttpResponse, Model,
    NewApiKeyRequest, NewConnectorRequest, PipelineClient,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

fn client() -> PipelineClient {
    PipelineClient::with_base_url(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

    if let Some(headers) = expected["headers"].as_array() {
        let expected_headers: Vec<(String, String)> = headers
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match &req.body {
        Some(body) => {
            let body: Value = serde_json::from_str(body).unwrap();
            assert_eq!(body, expected["body"], "{name}: body");
        }
        None => assert!(expected["body"].is_null(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Connectors
// ---------------------------------------------------------------------------

#[test]
fn new_connector_test_vectors() {
    let raw = include_str!("../../test-vectors/new_connector.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = NewConnectorRequest::from_value(case["input"].clone()).unwrap();

        let req = c.build_new_connector(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let parsed = c.parse_new_connector(simulated(case)).unwrap().parsed.unwrap();
        assert_eq!(parsed.to_value(), case["expected_result"], "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

#[test]
fn get_pipeline_config_test_vectors() {
    let raw = include_str!("../../test-vectors/get_pipeline_config.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();

        let req = c.build_get_pipeline_config(id);
        assert_request(name, &req, &case["expected_request"]);

        let envelope = c.parse_get_pipeline_config(simulated(case)).unwrap();
        let (variant, value) = match envelope.parsed {
            Some(GetPipelineConfigResponse::Ok(config)) => (Value::from("Ok"), config.to_value()),
            Some(GetPipelineConfigResponse::NotFound(err)) => {
                (Value::from("NotFound"), err.to_value())
            }
            None => (Value::Null, Value::Null),
        };
        assert_eq!(variant, case["expected_variant"], "{name}: variant");
        assert_eq!(value, case["expected_result"], "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// API keys
// ---------------------------------------------------------------------------

#[test]
fn create_api_key_test_vectors() {
    let raw = include_str!("../../test-vectors/create_api_key.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = NewApiKeyRequest::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_api_key(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let envelope = c.parse_create_api_key(simulated(case)).unwrap();
        let (variant, value) = match envelope.parsed {
            Some(CreateApiKeyResponse::Created(key)) => (Value::from("Created"), key.to_value()),
            Some(CreateApiKeyResponse::Conflict(err)) => (Value::from("Conflict"), err.to_value()),
            None => (Value::Null, Value::Null),
        };
        assert_eq!(variant, case["expected_variant"], "{name}: variant");
        assert_eq!(value, case["expected_result"], "{name}: parsed result");
    }
}
