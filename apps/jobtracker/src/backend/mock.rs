//! In-memory stand-in for the tracker API.
//!
//! Holds one record list for the whole process, sleeps a fixed delay before
//! answering, and issues the same demo token to everyone. Served over HTTP by
//! `routes`, or used in-process as a test double.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use crate::api_client::ApiError;
use crate::backend::{templates, Backend};
use crate::models::{AuthResponse, JobApplication, JobFields, JobStatus, MessageResponse, User};
use crate::session::TokenStorage;

/// Bearer token issued by every successful mock login or signup.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";
const DEMO_USER_ID: &str = "1";

/// Simulated response times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    /// Login and signup.
    pub auth: Duration,
    /// Token verification and CRUD calls.
    pub call: Duration,
    /// The two generation endpoints.
    pub generation: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            call: Duration::from_millis(500),
            generation: Duration::from_millis(2000),
        }
    }
}

impl MockLatency {
    pub fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            call: Duration::ZERO,
            generation: Duration::ZERO,
        }
    }
}

struct MockState {
    jobs: Vec<JobApplication>,
    user: User,
    last_id: i64,
}

pub struct MockBackend {
    state: Mutex<MockState>,
    latency: MockLatency,
    tokens: Option<Arc<dyn TokenStorage>>,
}

impl MockBackend {
    /// A mock seeded with the two demo applications.
    ///
    /// Without [`MockBackend::with_token_source`], the `Backend::verify` call
    /// sees no token and answers 401. The HTTP routes pass the header token
    /// to [`MockBackend::verify_token`] instead and need no source.
    pub fn new(latency: MockLatency) -> Self {
        Self::with_jobs(latency, seed_jobs())
    }

    pub fn with_jobs(latency: MockLatency, jobs: Vec<JobApplication>) -> Self {
        Self {
            state: Mutex::new(MockState {
                jobs,
                user: demo_user(),
                last_id: 0,
            }),
            latency,
            tokens: None,
        }
    }

    /// Lets in-process `verify` calls read the caller's stored token, the way
    /// the HTTP route reads the `Authorization` header.
    pub fn with_token_source(mut self, tokens: Arc<dyn TokenStorage>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Checks a presented bearer token and returns its user.
    pub async fn verify_token(&self, token: Option<&str>) -> Result<User, ApiError> {
        self.pause(self.latency.call).await;
        match token {
            Some(MOCK_TOKEN) => Ok(self.state.lock().await.user.clone()),
            Some(_) => Err(ApiError::with_message(401, "Invalid token")),
            None => Err(ApiError::with_message(401, "No token provided")),
        }
    }

    pub async fn job_count(&self) -> usize {
        self.state.lock().await.jobs.len()
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.pause(self.latency.auth).await;

        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            debug!("Mock login rejected for {email}");
            return Err(ApiError::with_message(401, "Invalid credentials"));
        }

        let user = demo_user();
        self.state.lock().await.user = user.clone();
        Ok(AuthResponse {
            token: MOCK_TOKEN.to_string(),
            user,
        })
    }

    async fn signup(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.pause(self.latency.auth).await;

        let user = User {
            id: DEMO_USER_ID.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.state.lock().await.user = user.clone();
        Ok(AuthResponse {
            token: MOCK_TOKEN.to_string(),
            user,
        })
    }

    async fn verify(&self) -> Result<User, ApiError> {
        let token = self.tokens.as_ref().and_then(|t| t.load());
        self.verify_token(token.as_deref()).await
    }

    async fn list_jobs(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.pause(self.latency.call).await;
        Ok(self.state.lock().await.jobs.clone())
    }

    async fn create_job(&self, fields: &JobFields) -> Result<JobApplication, ApiError> {
        self.pause(self.latency.call).await;

        let (company, title) = match (&fields.company, &fields.title) {
            (Some(company), Some(title)) => (company.clone(), title.clone()),
            _ => return Err(ApiError::with_message(400, "Company and title are required")),
        };

        let mut state = self.state.lock().await;
        let id = next_id(&mut state.last_id, Utc::now().timestamp_millis());

        let job = JobApplication {
            id: id.to_string(),
            company,
            title,
            status: fields.status.unwrap_or_default(),
            applied_date: fields.applied_date.unwrap_or_else(Utc::now),
            job_url: fields.job_url.clone(),
            notes: fields.notes.clone(),
            owner_id: DEMO_USER_ID.to_string(),
        };
        state.jobs.push(job.clone());

        debug!("Mock created job {}", job.id);
        Ok(job)
    }

    async fn update_job(&self, id: &str, fields: &JobFields) -> Result<JobApplication, ApiError> {
        self.pause(self.latency.call).await;

        let mut state = self.state.lock().await;
        let job = state
            .jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or_else(|| ApiError::with_message(404, "Job not found"))?;

        job.apply(fields);
        Ok(job.clone())
    }

    async fn delete_job(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.pause(self.latency.call).await;

        self.state.lock().await.jobs.retain(|job| job.id != id);
        Ok(MessageResponse {
            message: "Job deleted".to_string(),
        })
    }

    async fn generate_resume(
        &self,
        job_role: &str,
        experience: &str,
    ) -> Result<Vec<String>, ApiError> {
        self.pause(self.latency.generation).await;
        Ok(templates::resume_bullets(job_role, experience))
    }

    async fn generate_prep_plan(&self, job_role: &str, company: &str) -> Result<String, ApiError> {
        self.pause(self.latency.generation).await;
        Ok(templates::prep_plan(job_role, company))
    }
}

/// Time-based id that never repeats within one process, even when two
/// creates land in the same millisecond.
fn next_id(last_id: &mut i64, now_millis: i64) -> i64 {
    let id = now_millis.max(*last_id + 1);
    *last_id = id;
    id
}

fn demo_user() -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        name: "Demo User".to_string(),
        email: DEMO_EMAIL.to_string(),
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_jobs() -> Vec<JobApplication> {
    vec![
        JobApplication {
            id: "1".to_string(),
            company: "Google".to_string(),
            title: "Frontend Developer".to_string(),
            status: JobStatus::Interviewing,
            applied_date: seed_date(2024, 1, 15),
            job_url: Some("https://careers.google.com/jobs/123".to_string()),
            notes: Some("Initial screening completed, technical interview scheduled.".to_string()),
            owner_id: DEMO_USER_ID.to_string(),
        },
        JobApplication {
            id: "2".to_string(),
            company: "Microsoft".to_string(),
            title: "Software Engineer".to_string(),
            status: JobStatus::Applied,
            applied_date: seed_date(2024, 1, 10),
            job_url: Some("https://careers.microsoft.com/jobs/456".to_string()),
            notes: Some("Applied through LinkedIn, waiting for response.".to_string()),
            owner_id: DEMO_USER_ID.to_string(),
        },
    ]
}
