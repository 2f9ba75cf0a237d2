use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage of a tracked application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Every status, in the order the dashboard chart draws them.
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Unknown status '{s}' (expected Applied, Interviewing, Offer or Rejected)")
            })
    }
}

/// A single tracked job application as the backend returns it.
///
/// The id travels as `_id` and the owner as `userId` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(rename = "_id")]
    pub id: String,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub status: JobStatus,
    pub applied_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "userId")]
    pub owner_id: String,
}

impl JobApplication {
    /// Shallow merge: every field present in `fields` overwrites ours.
    pub fn apply(&mut self, fields: &JobFields) {
        if let Some(company) = &fields.company {
            self.company = company.clone();
        }
        if let Some(title) = &fields.title {
            self.title = title.clone();
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
        if let Some(applied_date) = fields.applied_date {
            self.applied_date = applied_date;
        }
        if let Some(job_url) = &fields.job_url {
            self.job_url = Some(job_url.clone());
        }
        if let Some(notes) = &fields.notes {
            self.notes = Some(notes.clone());
        }
    }
}

/// Client-editable fields of a job record.
///
/// Used as the body of both create and update calls; absent members are not
/// serialized, so an update only touches what the caller set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl JobFields {
    pub fn new(company: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_applied_date(mut self, applied_date: DateTime<Utc>) -> Self {
        self.applied_date = Some(applied_date);
        self
    }

    pub fn with_job_url(mut self, job_url: impl Into<String>) -> Self {
        self.job_url = Some(job_url.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
