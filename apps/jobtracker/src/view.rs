//! Plain-text rendering of store state. No business rules live here.

use std::fmt::Write;

use crate::models::{JobApplication, JobStatus, User};
use crate::store::JobStats;

pub const EMPTY_STATE: &str = "Get started by adding your first job application.";

const BAR_CHAR: char = '█';
const CHART_EMPTY: &str = "No applications yet";

/// One job as a small text card.
pub fn render_job_card(job: &JobApplication) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} @ {}  [{}]", job.title, job.company, job.status);
    let _ = writeln!(out, "  id: {}", job.id);
    let _ = writeln!(out, "  Applied: {}", job.applied_date.format("%b %-d, %Y"));
    if let Some(notes) = job.notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = writeln!(out, "  Notes: {notes}");
    }
    if let Some(url) = job.job_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "  Job posting: {url}");
    }
    out
}

pub fn render_job_list(jobs: &[JobApplication]) -> String {
    if jobs.is_empty() {
        return format!("{EMPTY_STATE}\n");
    }
    jobs.iter()
        .map(render_job_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_stats(stats: &JobStats) -> String {
    format!(
        "Total Applications: {}\nInterviewing: {}\nOffers: {}\nRejected: {}\n",
        stats.total,
        stats.interviewing(),
        stats.offer(),
        stats.rejected()
    )
}

/// Horizontal bar chart, one row per status with its share of the total,
/// scaled so the largest count fills `width` cells.
pub fn render_status_chart(stats: &JobStats, width: usize) -> String {
    if stats.total == 0 {
        return format!("{CHART_EMPTY}\n");
    }

    let max = JobStatus::ALL
        .iter()
        .map(|s| stats.count(*s))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for status in JobStatus::ALL {
        let count = stats.count(status);
        let cells = if max == 0 {
            0
        } else {
            // Round to nearest, but never hide a non-zero count.
            ((count * width + max / 2) / max).max(usize::from(count > 0))
        };
        let bar: String = std::iter::repeat(BAR_CHAR).take(cells).collect();
        let share = count as f64 * 100.0 / stats.total as f64;
        let _ = writeln!(
            out,
            "{:<12} {:>3} ({:>5.1}%) {}",
            status.as_str(),
            count,
            share,
            bar
        );
    }
    out
}

pub fn render_dashboard(user: Option<&User>, jobs: &[JobApplication], stats: &JobStats) -> String {
    let mut out = String::new();
    if let Some(user) = user {
        let _ = writeln!(out, "Welcome back, {}!\n", user.name);
    }
    out.push_str(&render_stats(stats));
    out.push('\n');
    out.push_str("Application Status\n");
    out.push_str(&render_status_chart(stats, 30));
    out.push('\n');
    out.push_str("Recent Applications\n");
    out.push_str(&render_job_list(jobs));
    out
}
