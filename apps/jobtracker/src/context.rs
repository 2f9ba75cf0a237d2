use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::api_client::ApiClient;
use crate::assistant::Assistant;
use crate::backend::{Backend, HttpBackend, MockBackend};
use crate::config::{BackendKind, Config};
use crate::models::User;
use crate::session::{FileTokenStorage, TokenStorage};
use crate::store::{AuthStore, JobStore};

/// Everything a view needs, passed in explicitly.
///
/// Built once at startup; the stores inside share one backend and one token
/// storage.
pub struct TrackerContext {
    pub auth: AuthStore,
    pub jobs: JobStore,
    pub assistant: Assistant,
}

impl TrackerContext {
    pub fn new(backend: Arc<dyn Backend>, tokens: Arc<dyn TokenStorage>) -> Self {
        Self {
            auth: AuthStore::new(backend.clone(), tokens),
            jobs: JobStore::new(backend.clone()),
            assistant: Assistant::new(backend),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let tokens: Arc<dyn TokenStorage> =
            Arc::new(FileTokenStorage::new(config.token_path.clone()));

        let backend: Arc<dyn Backend> = match config.backend {
            BackendKind::Http => {
                let client = ApiClient::new(config.api_url.clone(), tokens.clone())?;
                info!("Using HTTP backend at {}", client.base_url());
                Arc::new(HttpBackend::new(client))
            }
            BackendKind::Mock => {
                info!("Using in-process mock backend");
                Arc::new(MockBackend::new(config.mock_latency).with_token_source(tokens.clone()))
            }
        };

        Ok(Self::new(backend, tokens))
    }

    /// Restores a stored session. Run once before the first view.
    pub async fn bootstrap(&self) -> Option<User> {
        self.auth.verify().await
    }

    /// Ends the session and forgets the cached job list.
    pub fn logout(&self) {
        self.auth.logout();
        self.jobs.clear();
    }
}
