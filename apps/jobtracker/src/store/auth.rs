use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::backend::Backend;
use crate::models::{AuthResponse, Session, User};
use crate::session::TokenStorage;
use crate::store::{failure_message, read_lock, write_lock, StoreResult};

/// Holds the current session and keeps the durable token in step with it.
pub struct AuthStore {
    backend: Arc<dyn Backend>,
    tokens: Arc<dyn TokenStorage>,
    session: RwLock<Option<Session>>,
}

impl AuthStore {
    pub fn new(backend: Arc<dyn Backend>, tokens: Arc<dyn TokenStorage>) -> Self {
        Self {
            backend,
            tokens,
            session: RwLock::new(None),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> StoreResult<User> {
        match self.backend.login(email, password).await {
            Ok(response) => self.start_session(response),
            Err(e) => Err(failure_message(&e, "Login failed")),
        }
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> StoreResult<User> {
        match self.backend.signup(name, email, password).await {
            Ok(response) => self.start_session(response),
            Err(e) => Err(failure_message(&e, "Signup failed")),
        }
    }

    /// Clears the session and the stored token.
    pub fn logout(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to clear stored token: {e}");
        }
        *write_lock(&self.session) = None;
        info!("Logged out");
    }

    /// Restores a session from a previously stored token.
    ///
    /// Meant to run once at startup. Only an explicit rejection (401 or 403)
    /// clears the stored token. Any other failure, such as an unreachable
    /// server, leaves the token for the next run.
    pub async fn verify(&self) -> Option<User> {
        let token = self.tokens.load()?;

        match self.backend.verify().await {
            Ok(user) => {
                *write_lock(&self.session) = Some(Session {
                    token,
                    user: user.clone(),
                });
                Some(user)
            }
            Err(e) if matches!(e.status(), Some(401 | 403)) => {
                warn!("Stored token rejected: {e}");
                self.logout();
                None
            }
            Err(e) => {
                warn!("Could not verify stored token, keeping it: {e}");
                *write_lock(&self.session) = None;
                None
            }
        }
    }

    pub fn current_user(&self) -> Option<User> {
        read_lock(&self.session).as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        read_lock(&self.session).as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        read_lock(&self.session).is_some()
    }

    fn start_session(&self, response: AuthResponse) -> StoreResult<User> {
        self.tokens
            .save(&response.token)
            .map_err(|e| format!("Could not store session token: {e}"))?;

        info!("Signed in as {}", response.user.email);
        let user = response.user.clone();
        *write_lock(&self.session) = Some(Session {
            token: response.token,
            user: response.user,
        });
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{MockBackend, MockLatency, DEMO_EMAIL, DEMO_PASSWORD, MOCK_TOKEN};
    use crate::backend::testing::FailingBackend;
    use crate::session::MemoryTokenStorage;

    fn store_with(tokens: Arc<MemoryTokenStorage>) -> AuthStore {
        let backend = MockBackend::new(MockLatency::none()).with_token_source(tokens.clone());
        AuthStore::new(Arc::new(backend), tokens)
    }

    #[tokio::test]
    async fn test_login_with_demo_credentials_stores_token() {
        let tokens = Arc::new(MemoryTokenStorage::new());
        let store = store_with(tokens.clone());

        let user = store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(user.email, DEMO_EMAIL);
        assert_eq!(store.token().as_deref(), Some(MOCK_TOKEN));
        assert_eq!(tokens.load().as_deref(), Some(MOCK_TOKEN));
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_with_other_credentials_fails() {
        let tokens = Arc::new(MemoryTokenStorage::new());
        let store = store_with(tokens.clone());

        let err = store.login("demo@example.com", "hunter2").await.unwrap_err();
        assert_eq!(err, "Invalid credentials");
        assert!(!store.is_authenticated());
        assert!(tokens.load().is_none());
    }

    #[tokio::test]
    async fn test_signup_starts_session() {
        let store = store_with(Arc::new(MemoryTokenStorage::new()));
        let user = store.signup("Ada", "ada@example.com", "pw").await.unwrap();
        assert_eq!(store.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_token() {
        let tokens = Arc::new(MemoryTokenStorage::new());
        let store = store_with(tokens.clone());
        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        store.logout();
        assert!(!store.is_authenticated());
        assert!(tokens.load().is_none());
    }

    #[tokio::test]
    async fn test_verify_restores_session_from_stored_token() {
        let tokens = Arc::new(MemoryTokenStorage::with_token(MOCK_TOKEN));
        let store = store_with(tokens);

        let user = store.verify().await.expect("session restored");
        assert_eq!(user.name, "Demo User");
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_verify_without_token_is_noop() {
        let store = store_with(Arc::new(MemoryTokenStorage::new()));
        assert!(store.verify().await.is_none());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_verify_clears_stored_token() {
        let tokens = Arc::new(MemoryTokenStorage::with_token("expired"));
        let store = store_with(tokens.clone());

        assert!(store.verify().await.is_none());
        assert!(tokens.load().is_none());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_unavailable_backend_keeps_stored_token() {
        let tokens = Arc::new(MemoryTokenStorage::with_token(MOCK_TOKEN));
        let store = AuthStore::new(Arc::new(FailingBackend::silent()), tokens.clone());

        assert!(store.verify().await.is_none());
        assert!(!store.is_authenticated());
        assert_eq!(tokens.load().as_deref(), Some(MOCK_TOKEN));
    }

    #[tokio::test]
    async fn test_fallback_messages() {
        let store = AuthStore::new(
            Arc::new(FailingBackend::silent()),
            Arc::new(MemoryTokenStorage::new()),
        );
        assert_eq!(store.login("a", "b").await.unwrap_err(), "Login failed");
        assert_eq!(store.signup("a", "b", "c").await.unwrap_err(), "Signup failed");
    }
}
