use std::sync::Arc;

use crate::backend::MockBackend;

/// Shared state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The record list every request reads and writes.
    pub backend: Arc<MockBackend>,
}

impl AppState {
    pub fn new(backend: MockBackend) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
