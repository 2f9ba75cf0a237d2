use async_trait::async_trait;
use serde_json::Value;

use crate::api_client::ApiError;
use crate::backend::Backend;
use crate::models::{AuthResponse, JobApplication, JobFields, MessageResponse, User};

/// A backend whose every call fails with the same 503 payload.
pub struct FailingBackend {
    payload: Value,
}

impl FailingBackend {
    pub fn with_message(message: &str) -> Self {
        Self {
            payload: serde_json::json!({ "message": message }),
        }
    }

    /// Fails without a `message` field, so callers fall back to their own text.
    pub fn silent() -> Self {
        Self {
            payload: Value::Null,
        }
    }

    fn err(&self) -> ApiError {
        ApiError::Api {
            status: 503,
            payload: self.payload.clone(),
        }
    }
}

#[async_trait]
impl Backend for FailingBackend {
    async fn login(&self, _: &str, _: &str) -> Result<AuthResponse, ApiError> {
        Err(self.err())
    }
    async fn signup(&self, _: &str, _: &str, _: &str) -> Result<AuthResponse, ApiError> {
        Err(self.err())
    }
    async fn verify(&self) -> Result<User, ApiError> {
        Err(self.err())
    }
    async fn list_jobs(&self) -> Result<Vec<JobApplication>, ApiError> {
        Err(self.err())
    }
    async fn create_job(&self, _: &JobFields) -> Result<JobApplication, ApiError> {
        Err(self.err())
    }
    async fn update_job(&self, _: &str, _: &JobFields) -> Result<JobApplication, ApiError> {
        Err(self.err())
    }
    async fn delete_job(&self, _: &str) -> Result<MessageResponse, ApiError> {
        Err(self.err())
    }
    async fn generate_resume(&self, _: &str, _: &str) -> Result<Vec<String>, ApiError> {
        Err(self.err())
    }
    async fn generate_prep_plan(&self, _: &str, _: &str) -> Result<String, ApiError> {
        Err(self.err())
    }
}
