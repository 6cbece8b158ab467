//! Every call shape against the live mock server.
//!
//! # Design
//! Starts the mock pipeline manager on a random port in its own thread and
//! runtime, then exercises the blocking (ureq) and async (reqwest) paths over
//! real HTTP. Validates that request building, transport and response
//! parsing agree with the server end to end.

use pipeline_client::{
    ApiError, ClientConfig, ConnectorConfig, CreateApiKeyResponse, FormatConfig,
    GetPipelineConfigResponse, Model, NewApiKeyRequest, NewConnectorRequest, PipelineClient,
    TransportConfig,
};
use mock_server::MockState;
use serde_json::json;

/// Start a mock server seeded with `state` and return its base URL.
fn start_server(state: MockState) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, state).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn pipeline(name: &str) -> serde_json::Value {
    json!({
        "inputs": {"orders": {"stream": "ORDERS"}},
        "outputs": {},
        "name": name,
        "workers": 4,
        "telemetry": {"enabled": false}
    })
}

fn seeded() -> MockState {
    MockState::new()
        .with_pipeline("p1", pipeline("fraud-detection"))
        .with_pipeline("p2", pipeline("billing"))
}

fn connector(name: &str) -> NewConnectorRequest {
    NewConnectorRequest::new(
        name,
        "Orders from a CSV file",
        ConnectorConfig::new(
            TransportConfig::new("file").with_config(json!({"path": "orders.csv"})),
            FormatConfig::new("csv"),
        ),
    )
}

#[test]
fn blocking_lifecycle() {
    let client = PipelineClient::with_base_url(&start_server(seeded()));

    // Step 1: create a connector.
    let created = client.new_connector_blocking(&connector("orders-in")).unwrap();
    assert!(created.is_some());

    // Step 2: issue an API key.
    let envelope = client
        .create_api_key_detailed_blocking(&NewApiKeyRequest::new("ci"))
        .unwrap();
    assert_eq!(envelope.status, 201);
    match envelope.parsed {
        Some(CreateApiKeyResponse::Created(key)) => {
            assert_eq!(key.name, "ci");
            assert!(key.api_key.starts_with("apikey:"));
        }
        other => panic!("expected Created, got {other:?}"),
    }

    // Step 3: same key name again is a documented conflict.
    let again = client.create_api_key_blocking(&NewApiKeyRequest::new("ci")).unwrap();
    assert!(matches!(again, Some(CreateApiKeyResponse::Conflict(_))));

    // Step 4: fetch a seeded pipeline config; unknown keys survive.
    match client.get_pipeline_config_blocking("p1").unwrap() {
        Some(GetPipelineConfigResponse::Ok(config)) => {
            assert_eq!(config.name.as_deref(), Some("fraud-detection"));
            assert_eq!(config.workers, Some(4));
            assert!(config.contains_key("telemetry"));
            assert_eq!(config.to_value(), pipeline("fraud-detection"));
        }
        other => panic!("expected Ok, got {other:?}"),
    }

    // Step 5: unknown pipeline is a typed 404, not an error.
    let envelope = client.get_pipeline_config_detailed_blocking("missing").unwrap();
    assert_eq!(envelope.status, 404);
    match envelope.parsed {
        Some(GetPipelineConfigResponse::NotFound(err)) => {
            assert_eq!(err.error_code, "UnknownPipeline");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn blocking_undocumented_status_without_raise() {
    let client = PipelineClient::with_base_url(&start_server(MockState::new()));

    let envelope = client.new_connector_detailed_blocking(&connector("")).unwrap();
    assert_eq!(envelope.status, 400);
    assert!(envelope.parsed.is_none());
    assert!(envelope.header("content-type").unwrap().starts_with("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&envelope.content).unwrap();
    assert_eq!(body["error_code"], "InvalidConnectorName");

    assert!(client.new_connector_blocking(&connector("")).unwrap().is_none());
}

#[test]
fn blocking_undocumented_status_with_raise() {
    let client = PipelineClient::new(
        ClientConfig::builder(start_server(MockState::new()))
            .raise_on_unexpected_status(true)
            .build(),
    );

    let err = client.new_connector_blocking(&connector("")).unwrap_err();
    match err {
        ApiError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 400);
            assert!(String::from_utf8_lossy(&body).contains("InvalidConnectorName"));
        }
        other => panic!("expected UnexpectedStatus, got {other}"),
    }
}

#[test]
fn credential_header_reaches_server() {
    let base_url = start_server(seeded().require_api_key("secret"));

    let anonymous = PipelineClient::with_base_url(&base_url);
    let envelope = anonymous.get_pipeline_config_detailed_blocking("p1").unwrap();
    assert_eq!(envelope.status, 401);
    assert!(envelope.parsed.is_none());

    let authorized = PipelineClient::new(ClientConfig::builder(&base_url).token("secret").build());
    let parsed = authorized.get_pipeline_config_blocking("p1").unwrap();
    assert!(matches!(parsed, Some(GetPipelineConfigResponse::Ok(_))));
}

#[test]
fn blocking_transport_failure_propagates() {
    let client = PipelineClient::with_base_url(&closed_port_url());
    let err = client.get_pipeline_config_blocking("p1").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err}");
}

#[tokio::test]
async fn async_lifecycle() {
    let client = PipelineClient::with_base_url(&start_server(seeded()));

    let created = client.new_connector_detailed(&connector("orders-in")).await.unwrap();
    assert_eq!(created.status, 200);
    assert!(created.parsed.is_some());

    let key = client.create_api_key(&NewApiKeyRequest::new("ops")).await.unwrap();
    assert!(matches!(key, Some(CreateApiKeyResponse::Created(_))));

    match client.get_pipeline_config("p2").await.unwrap() {
        Some(GetPipelineConfigResponse::Ok(config)) => {
            assert_eq!(config.name.as_deref(), Some("billing"));
        }
        other => panic!("expected Ok, got {other:?}"),
    }

    let missing = client.get_pipeline_config_detailed("missing").await.unwrap();
    assert!(matches!(
        missing.parsed,
        Some(GetPipelineConfigResponse::NotFound(_))
    ));
}

#[tokio::test]
async fn async_undocumented_status() {
    let base_url = start_server(MockState::new());

    let lenient = PipelineClient::with_base_url(&base_url);
    let envelope = lenient.new_connector_detailed(&connector("")).await.unwrap();
    assert_eq!(envelope.status, 400);
    assert!(envelope.parsed.is_none());
    assert!(!envelope.content.is_empty());

    let strict = PipelineClient::new(
        ClientConfig::builder(&base_url)
            .raise_on_unexpected_status(true)
            .build(),
    );
    let err = strict.new_connector(&connector("")).await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 400, .. }));
}

#[tokio::test]
async fn async_transport_failure_propagates() {
    let client = PipelineClient::with_base_url(&closed_port_url());
    let err = client.get_pipeline_config("p1").await.unwrap_err();
    assert!(matches!(err, ApiError::AsyncTransport(_)), "{err}");
    assert!(err.is_transport());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_share_one_client() {
    let mut state = MockState::new();
    for i in 0..16 {
        state = state.with_pipeline(format!("p{i}"), pipeline(&format!("pipeline-{i}")));
    }
    let client = PipelineClient::with_base_url(&start_server(state));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let parsed = client.get_pipeline_config(&format!("p{i}")).await.unwrap();
                (i, parsed)
            })
        })
        .collect();

    for task in tasks {
        let (i, parsed) = task.await.unwrap();
        match parsed {
            Some(GetPipelineConfigResponse::Ok(config)) => {
                assert_eq!(config.name, Some(format!("pipeline-{i}")));
            }
            other => panic!("p{i}: expected Ok, got {other:?}"),
        }
    }
}

#[test]
fn concurrent_blocking_calls_share_one_client() {
    let client = PipelineClient::with_base_url(&start_server(seeded()));

    let handles: Vec<_> = ["p1", "p2", "p1", "p2"]
        .into_iter()
        .map(|id| {
            let client = client.clone();
            std::thread::spawn(move || (id, client.get_pipeline_config_blocking(id).unwrap()))
        })
        .collect();

    for handle in handles {
        let (id, parsed) = handle.join().unwrap();
        let expected = if id == "p1" { "fraud-detection" } else { "billing" };
        match parsed {
            Some(GetPipelineConfigResponse::Ok(config)) => {
                assert_eq!(config.name.as_deref(), Some(expected));
            }
            other => panic!("{id}: expected Ok, got {other:?}"),
        }
    }
}

/// A pipeline whose serialized config is larger than 11 MiB.
fn large_pipeline() -> (serde_json::Value, usize) {
    let blob = "x".repeat(11 * 1024 * 1024);
    let len = blob.len();
    let mut config = pipeline("large");
    config["inputs"]["orders"]["schema"] = json!(blob);
    (config, len)
}

#[test]
fn blocking_reads_body_larger_than_ten_mib() {
    let (config, len) = large_pipeline();
    let client = PipelineClient::with_base_url(&start_server(
        MockState::new().with_pipeline("big", config),
    ));

    match client.get_pipeline_config_blocking("big").unwrap() {
        Some(GetPipelineConfigResponse::Ok(config)) => {
            let schema = config.inputs["orders"]["schema"].as_str().unwrap();
            assert_eq!(schema.len(), len);
        }
        other => panic!("expected Ok, got {other:?}"),
    }
}

#[tokio::test]
async fn async_reads_body_larger_than_ten_mib() {
    let (config, len) = large_pipeline();
    let client = PipelineClient::with_base_url(&start_server(
        MockState::new().with_pipeline("big", config),
    ));

    let envelope = client.get_pipeline_config_detailed("big").await.unwrap();
    assert!(envelope.content.len() > len);
    match envelope.parsed {
        Some(GetPipelineConfigResponse::Ok(config)) => {
            let schema = config.inputs["orders"]["schema"].as_str().unwrap();
            assert_eq!(schema.len(), len);
        }
        other => panic!("expected Ok, got {other:?}"),
    }
}
