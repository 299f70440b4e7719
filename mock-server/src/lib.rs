use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Method, Uri},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// One request as received by the server: method, path, decoded query
/// pairs, headers, and the JSON body if there was one.
#[derive(Clone, Debug, Serialize)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

pub type Journal = Arc<RwLock<Vec<Recorded>>>;

/// Build the router together with a handle on its journal, for tests that
/// assert on what the server received.
pub fn recording_app() -> (Router, Journal) {
    let journal: Journal = Arc::new(RwLock::new(Vec::new()));
    let router = Router::new()
        .route("/foo", any(record))
        .route("/bar", any(record))
        .route("/requests", get(list_requests))
        .with_state(journal.clone());
    (router, journal)
}

pub fn app() -> Router {
    recording_app().0
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

/// Record the incoming request and answer `{"result":"ok"}` regardless of
/// verb or payload.
async fn record(
    State(journal): State<Journal>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let entry = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
        body: serde_json::from_slice(&body).ok(),
    };
    journal.write().await.push(entry);
    Json(json!({ "result": "ok" }))
}

async fn list_requests(State(journal): State<Journal>) -> Json<Vec<Recorded>> {
    Json(journal.read().await.clone())
}
