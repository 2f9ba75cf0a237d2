//! AI helpers: resume bullet points and interview prep plans.

use std::sync::Arc;

use tracing::debug;

use crate::backend::Backend;
use crate::store::{failure_message, StoreResult};
use crate::validation::require_text;

pub struct Assistant {
    backend: Arc<dyn Backend>,
}

impl Assistant {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub async fn resume_bullets(&self, job_role: &str, experience: &str) -> StoreResult<Vec<String>> {
        require_text("Job role", job_role).map_err(|e| e.to_string())?;
        require_text("Experience", experience).map_err(|e| e.to_string())?;

        debug!("Generating resume bullets for {job_role}");
        self.backend
            .generate_resume(job_role.trim(), experience.trim())
            .await
            .map_err(|e| failure_message(&e, "Failed to generate resume bullet points"))
    }

    pub async fn prep_plan(&self, job_role: &str, company: &str) -> StoreResult<String> {
        require_text("Job role", job_role).map_err(|e| e.to_string())?;
        require_text("Company name", company).map_err(|e| e.to_string())?;

        debug!("Generating prep plan for {job_role} at {company}");
        self.backend
            .generate_prep_plan(job_role.trim(), company.trim())
            .await
            .map_err(|e| failure_message(&e, "Failed to generate preparation plan"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{MockBackend, MockLatency};
    use crate::backend::testing::FailingBackend;

    fn assistant() -> Assistant {
        Assistant::new(Arc::new(MockBackend::new(MockLatency::none())))
    }

    #[tokio::test]
    async fn test_prep_plan_mentions_role_and_company() {
        let plan = assistant()
            .prep_plan("Backend Engineer", "Acme")
            .await
            .unwrap();
        assert!(plan.contains("Backend Engineer"));
        assert!(plan.contains("Acme"));
    }

    #[tokio::test]
    async fn test_resume_bullets() {
        let bullets = assistant()
            .resume_bullets("Data Engineer", "Built ETL pipelines for 4 years")
            .await
            .unwrap();
        assert_eq!(bullets.len(), 3);
        assert!(bullets[0].contains("Data Engineer"));
    }

    #[tokio::test]
    async fn test_blank_inputs_fail_before_calling_backend() {
        // The failing backend would answer with "down"; validation must win.
        let assistant = Assistant::new(Arc::new(FailingBackend::with_message("down")));
        assert_eq!(
            assistant.prep_plan("Backend Engineer", "  ").await.unwrap_err(),
            "Company name is required"
        );
        assert_eq!(
            assistant.resume_bullets("", "years").await.unwrap_err(),
            "Job role is required"
        );
    }

    #[tokio::test]
    async fn test_backend_failures() {
        let assistant = Assistant::new(Arc::new(FailingBackend::silent()));
        assert_eq!(
            assistant.prep_plan("SRE", "Acme").await.unwrap_err(),
            "Failed to generate preparation plan"
        );
        assert_eq!(
            assistant.resume_bullets("SRE", "5 years").await.unwrap_err(),
            "Failed to generate resume bullet points"
        );

        let assistant = Assistant::new(Arc::new(FailingBackend::with_message("Quota exceeded")));
        assert_eq!(
            assistant.prep_plan("SRE", "Acme").await.unwrap_err(),
            "Quota exceeded"
        );
    }
}
