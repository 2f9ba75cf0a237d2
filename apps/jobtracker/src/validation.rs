//! Required-field checks run before any request is made.

use std::fmt;

use crate::models::JobFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required(&'static str),
    InvalidUrl(&'static str),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(label) => write!(f, "{label} is required"),
            FieldError::InvalidUrl(label) => {
                write!(f, "{label} must start with http:// or https://")
            }
        }
    }
}

/// Checks a job form.
///
/// On create (`require_all`) company and title must be present and
/// non-blank. On update, only the members that are present are checked.
pub fn validate_job_fields(fields: &JobFields, require_all: bool) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_text(&mut errors, "Company", fields.company.as_deref(), require_all);
    check_text(&mut errors, "Job title", fields.title.as_deref(), require_all);

    if let Some(url) = fields.job_url.as_deref().map(str::trim) {
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(FieldError::InvalidUrl("Job URL"));
        }
    }

    errors
}

/// A single required text input.
pub fn require_text(label: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(label))
    } else {
        Ok(())
    }
}

/// Joins errors into one line suitable for inline display.
pub fn first_error_message(errors: &[FieldError]) -> Option<String> {
    if errors.is_empty() {
        return None;
    }
    Some(
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn check_text(
    errors: &mut Vec<FieldError>,
    label: &'static str,
    value: Option<&str>,
    required: bool,
) {
    match value {
        Some(v) if v.trim().is_empty() => errors.push(FieldError::Required(label)),
        None if required => errors.push(FieldError::Required(label)),
        _ => {}
    }
}
