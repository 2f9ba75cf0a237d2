use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, error};

use crate::api_client::ApiError;
use crate::backend::Backend;
use crate::models::{JobApplication, JobFields};
use crate::store::stats::{compute_stats, JobStats};
use crate::store::{failure_message, read_lock, write_lock, StoreResult};

/// The session's cached copy of the user's job list.
///
/// The cache is reconciled in place after each successful call: created
/// records are appended, updated ones replaced by id, deleted ones removed.
/// Overlapping calls each apply their own completion, so the last response
/// to land wins.
pub struct JobStore {
    backend: Arc<dyn Backend>,
    jobs: RwLock<Vec<JobApplication>>,
    loading: AtomicBool,
}

impl JobStore {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            jobs: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
        }
    }

    /// Reloads the list. A failure is logged and the current list kept.
    pub async fn fetch_all(&self) {
        if let Err(e) = self.try_fetch_all().await {
            error!("Error fetching jobs: {e}");
        }
    }

    /// Reloads the list, surfacing any failure to the caller so it can
    /// offer a retry. The current list is kept on failure.
    pub async fn try_fetch_all(&self) -> Result<(), ApiError> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.backend.list_jobs().await;
        self.loading.store(false, Ordering::SeqCst);

        let jobs = result?;
        debug!("Fetched {} jobs", jobs.len());
        *write_lock(&self.jobs) = jobs;
        Ok(())
    }

    pub async fn create(&self, fields: JobFields) -> StoreResult<JobApplication> {
        match self.backend.create_job(&fields).await {
            Ok(job) => {
                write_lock(&self.jobs).push(job.clone());
                Ok(job)
            }
            Err(e) => Err(failure_message(&e, "Failed to add job")),
        }
    }

    pub async fn update(&self, id: &str, fields: JobFields) -> StoreResult<JobApplication> {
        match self.backend.update_job(id, &fields).await {
            Ok(job) => {
                for existing in write_lock(&self.jobs).iter_mut() {
                    if existing.id == id {
                        *existing = job.clone();
                    }
                }
                Ok(job)
            }
            Err(e) => Err(failure_message(&e, "Failed to update job")),
        }
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        match self.backend.delete_job(id).await {
            Ok(_) => {
                write_lock(&self.jobs).retain(|job| job.id != id);
                Ok(())
            }
            Err(e) => Err(failure_message(&e, "Failed to delete job")),
        }
    }

    /// Snapshot of the cached list.
    pub fn jobs(&self) -> Vec<JobApplication> {
        read_lock(&self.jobs).clone()
    }

    pub fn find(&self, id: &str) -> Option<JobApplication> {
        read_lock(&self.jobs).iter().find(|job| job.id == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> JobStats {
        compute_stats(&read_lock(&self.jobs))
    }

    /// Drops the cached list, e.g. when the session ends.
    pub fn clear(&self) {
        write_lock(&self.jobs).clear();
    }
}
