use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{JobApplication, JobStatus};

/// Per-status counts over a job list. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobStats {
    pub total: usize,
    pub counts_by_status: BTreeMap<JobStatus, usize>,
}

impl JobStats {
    pub fn count(&self, status: JobStatus) -> usize {
        self.counts_by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn applied(&self) -> usize {
        self.count(JobStatus::Applied)
    }

    pub fn interviewing(&self) -> usize {
        self.count(JobStatus::Interviewing)
    }

    pub fn offer(&self) -> usize {
        self.count(JobStatus::Offer)
    }

    pub fn rejected(&self) -> usize {
        self.count(JobStatus::Rejected)
    }
}

/// Every status is present in the result, zero when no job has it.
pub fn compute_stats(jobs: &[JobApplication]) -> JobStats {
    let mut counts_by_status: BTreeMap<JobStatus, usize> =
        JobStatus::ALL.into_iter().map(|status| (status, 0)).collect();

    for job in jobs {
        *counts_by_status.entry(job.status).or_insert(0) += 1;
    }

    JobStats {
        total: jobs.len(),
        counts_by_status,
    }
}
