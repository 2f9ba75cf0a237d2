//! Backend capability set: the seam between the stores and whatever serves
//! the data.
//!
//! `HttpBackend` talks to a real service through [`ApiClient`].
//! `MockBackend` keeps everything in memory and simulates latency.
//!
//! Stores hold an `Arc<dyn Backend>`, chosen at startup from config.

pub mod http;
pub mod mock;
pub mod templates;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::api_client::ApiError;
use crate::models::{AuthResponse, JobApplication, JobFields, MessageResponse, User};

pub use http::HttpBackend;
pub use mock::{MockBackend, MOCK_TOKEN};

#[async_trait]
pub trait Backend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;

    async fn signup(&self, name: &str, email: &str, password: &str)
        -> Result<AuthResponse, ApiError>;

    /// Resolves the user behind the currently stored token.
    async fn verify(&self) -> Result<User, ApiError>;

    async fn list_jobs(&self) -> Result<Vec<JobApplication>, ApiError>;

    async fn create_job(&self, fields: &JobFields) -> Result<JobApplication, ApiError>;

    async fn update_job(&self, id: &str, fields: &JobFields) -> Result<JobApplication, ApiError>;

    async fn delete_job(&self, id: &str) -> Result<MessageResponse, ApiError>;

    async fn generate_resume(&self, job_role: &str, experience: &str)
        -> Result<Vec<String>, ApiError>;

    async fn generate_prep_plan(&self, job_role: &str, company: &str) -> Result<String, ApiError>;
}
