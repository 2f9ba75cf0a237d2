use std::sync::Arc;

use jobtracker::api_client::ApiClient;
use jobtracker::backend::mock::{MockBackend, MockLatency};
use jobtracker::backend::HttpBackend;
use jobtracker::context::TrackerContext;
use jobtracker::routes::build_router;
use jobtracker::session::{FileTokenStorage, TokenStorage};
use jobtracker::state::AppState;

/// Serves a fresh, latency-free mock API on an ephemeral port and returns
/// its `/api` base URL.
pub async fn spawn_mock_api() -> String {
    let app = build_router(AppState::new(MockBackend::new(MockLatency::none())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// A context wired to `base_url` over HTTP, with its token kept in a file
/// under `dir`.
pub fn http_context(base_url: &str, dir: &std::path::Path) -> (TrackerContext, Arc<FileTokenStorage>) {
    let tokens = Arc::new(FileTokenStorage::new(dir.join("token")));
    let storage: Arc<dyn TokenStorage> = tokens.clone();
    let client = ApiClient::new(base_url, storage.clone()).unwrap();
    let ctx = TrackerContext::new(Arc::new(HttpBackend::new(client)), storage);
    (ctx, tokens)
}
