use async_trait::async_trait;

use crate::api_client::{ApiClient, ApiError};
use crate::backend::Backend;
use crate::models::{
    AuthResponse, JobApplication, JobFields, LoginRequest, MessageResponse, PrepRequest,
    PrepResponse, ResumeRequest, ResumeResponse, SignupRequest, User, VerifyResponse,
};

/// Backend served over HTTP by the tracker API.
#[derive(Clone)]
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/auth/login", &body).await
    }

    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/auth/signup", &body).await
    }

    async fn verify(&self) -> Result<User, ApiError> {
        let response: VerifyResponse = self.client.get("/auth/verify").await?;
        Ok(response.user)
    }

    async fn list_jobs(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.client.get("/jobs").await
    }

    async fn create_job(&self, fields: &JobFields) -> Result<JobApplication, ApiError> {
        self.client.post("/jobs", fields).await
    }

    async fn update_job(&self, id: &str, fields: &JobFields) -> Result<JobApplication, ApiError> {
        self.client.put(&format!("/jobs/{id}"), fields).await
    }

    async fn delete_job(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/jobs/{id}")).await
    }

    async fn generate_resume(
        &self,
        job_role: &str,
        experience: &str,
    ) -> Result<Vec<String>, ApiError> {
        let body = ResumeRequest {
            job_role: job_role.to_string(),
            experience: experience.to_string(),
        };
        let response: ResumeResponse = self.client.post("/ai/resume", &body).await?;
        Ok(response.bullet_points)
    }

    async fn generate_prep_plan(&self, job_role: &str, company: &str) -> Result<String, ApiError> {
        let body = PrepRequest {
            job_role: job_role.to_string(),
            company: company.to_string(),
        };
        let response: PrepResponse = self.client.post("/ai/prep", &body).await?;
        Ok(response.prep_plan)
    }
}
