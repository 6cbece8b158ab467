//! In-memory stand-in for the pipeline manager, used by the client's
//! integration tests.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

/// Seed data and settings for a mock server instance.
#[derive(Debug, Clone, Default)]
pub struct MockState {
    pipelines: HashMap<String, Value>,
    api_key: Option<String>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `config` from `GET /pipelines/{id}/config`.
    pub fn with_pipeline(mut self, id: impl Into<String>, config: Value) -> Self {
        self.pipelines.insert(id.into(), config);
        self
    }

    /// Answer 401 on pipeline endpoints unless `Authorization: Bearer <key>`
    /// is present.
    pub fn require_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

#[derive(Default)]
struct Db {
    pipelines: HashMap<String, Value>,
    connectors: HashMap<Uuid, Value>,
    api_keys: HashMap<String, Uuid>,
}

struct Shared {
    db: RwLock<Db>,
    api_key: Option<String>,
}

type AppState = Arc<Shared>;

#[derive(Deserialize)]
pub struct NewApiKey {
    pub name: String,
}

pub fn app() -> Router {
    app_with(MockState::default())
}

pub fn app_with(state: MockState) -> Router {
    let shared = Arc::new(Shared {
        db: RwLock::new(Db {
            pipelines: state.pipelines,
            ..Db::default()
        }),
        api_key: state.api_key,
    });
    Router::new()
        .route("/v0/connectors", post(new_connector))
        .route("/v0/api_keys", post(create_api_key))
        .route("/pipelines/{pipeline_id}/config", get(get_pipeline_config))
        .with_state(shared)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, MockState::default()).await
}

pub async fn run_with(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

fn error_response(
    status: StatusCode,
    message: String,
    error_code: &str,
    details: Value,
) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({
            "message": message,
            "error_code": error_code,
            "details": details,
        })),
    )
}

async fn new_connector(
    State(state): State<AppState>,
    Json(input): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let name = input.get("name").and_then(Value::as_str).unwrap_or_default();
    if name.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "connector name must not be empty".to_string(),
            "InvalidConnectorName",
            Value::Null,
        );
    }
    let connector_id = Uuid::new_v4();
    debug!(%connector_id, name, "created connector");
    state.db.write().await.connectors.insert(connector_id, input);
    (StatusCode::OK, Json(json!({ "connector_id": connector_id })))
}

async fn create_api_key(
    State(state): State<AppState>,
    Json(input): Json<NewApiKey>,
) -> (StatusCode, Json<Value>) {
    let mut db = state.db.write().await;
    if db.api_keys.contains_key(&input.name) {
        return error_response(
            StatusCode::CONFLICT,
            format!("An API key with name '{}' already exists", input.name),
            "DuplicateName",
            Value::Null,
        );
    }
    let api_key_id = Uuid::new_v4();
    db.api_keys.insert(input.name.clone(), api_key_id);
    (
        StatusCode::CREATED,
        Json(json!({
            "api_key": format!("apikey:{}", Uuid::new_v4().simple()),
            "api_key_id": api_key_id,
            "name": input.name,
        })),
    )
}

async fn get_pipeline_config(
    State(state): State<AppState>,
    Path(pipeline_id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if let Some(key) = &state.api_key {
        let expected = format!("Bearer {key}");
        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if presented != Some(expected.as_str()) {
            return error_response(
                StatusCode::UNAUTHORIZED,
                "missing or invalid API key".to_string(),
                "Unauthorized",
                Value::Null,
            );
        }
    }
    let db = state.db.read().await;
    match db.pipelines.get(&pipeline_id) {
        Some(config) => (StatusCode::OK, Json(config.clone())),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("Unknown pipeline id '{pipeline_id}'"),
            "UnknownPipeline",
            json!({ "pipeline_id": pipeline_id }),
        ),
    }
}
