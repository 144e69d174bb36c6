use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vitrine::config::Config;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// One request observed by the mock catalog: the action, its params, and
/// the X-Auth header the client sent.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub action: String,
    pub params: Value,
    pub auth: Option<String>,
}

/// In-process stand-in for the catalog API.
///
/// Serves the configured identifier window and item payload, records every
/// request it sees, and can be told to fail `get_ids` with a 500.
#[derive(Default)]
pub struct MockCatalog {
    pub requests: Mutex<Vec<SeenRequest>>,
    pub ids: Mutex<Vec<String>>,
    pub items: Mutex<Value>,
    pub fail_get_ids: AtomicBool,
    /// Hold every response for this long before answering.
    pub delay: Mutex<Option<Duration>>,
}

impl MockCatalog {
    pub fn new() -> Arc<Self> {
        let mock = Self::default();
        *mock.items.lock().unwrap() = json!([]);
        Arc::new(mock)
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(mock): State<Arc<MockCatalog>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let delay = *mock.delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let action = body["action"].as_str().unwrap_or_default().to_string();

    mock.requests.lock().unwrap().push(SeenRequest {
        action: action.clone(),
        params: body["params"].clone(),
        auth: headers
            .get("X-Auth")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    });

    match action.as_str() {
        "get_ids" => {
            if mock.fail_get_ids.load(Ordering::SeqCst) {
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
            let ids = mock.ids.lock().unwrap().clone();
            Json(json!({ "result": ids })).into_response()
        }
        "get_items" => {
            let items = mock.items.lock().unwrap().clone();
            Json(json!({ "result": items })).into_response()
        }
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// Bind the mock catalog on an ephemeral port and return its base URL.
pub async fn spawn_catalog(mock: Arc<MockCatalog>) -> String {
    let app = Router::new().route("/", post(handle)).with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/")
}

pub fn test_config(api_url: String) -> Config {
    Config {
        api_url,
        request_timeout: Duration::from_secs(5),
        ..Config::default()
    }
}
