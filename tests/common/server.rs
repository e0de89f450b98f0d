//! Mock HTTP server answering canned responses
//!
//! A single axum fallback handler serves every route, so tests describe the
//! remote services as a table of `(path with query, status, body)`. Requests are
//! recorded so tests can assert which endpoints were (not) contacted.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<String, (u16, String)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct TestServer {
    pub base_url: String,
    state: MockState,
    // Owns the server task; dropping it stops the server
    _runtime: Runtime,
}

async fn canned(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, String) {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), |p| p.as_str().to_string());

    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            method: method.to_string(),
            path: path.clone(),
            body,
        });

    match state.routes.get(&path) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).expect("valid canned status"),
            body.clone(),
        ),
        None => (StatusCode::NOT_FOUND, "404: Not Found".to_string()),
    }
}

impl TestServer {
    /// Serve `routes`; any other path answers 404
    pub fn start(routes: &[(&str, u16, &str)]) -> std::io::Result<TestServer> {
        let state = MockState {
            routes: Arc::new(
                routes
                    .iter()
                    .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
                    .collect(),
            ),
            requests: Arc::default(),
        };
        let app = Router::new().fallback(canned).with_state(state.clone());

        let runtime = Runtime::new()?;
        let listener = runtime.block_on(TcpListener::bind("127.0.0.1:0"))?;
        let address = listener.local_addr()?;
        runtime.spawn(async move {
            axum::serve(listener, app).await.expect("run mock server");
        });

        Ok(TestServer {
            base_url: format!("http://{address}"),
            state,
            _runtime: runtime,
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    pub fn was_requested(&self, path: &str) -> bool {
        self.requests().iter().any(|r| r.path == path)
    }
}
