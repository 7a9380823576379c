//! Request bodies and boundary validation
//!
//! Every field is optional at the serde level so that a missing field is
//! reported per path, in the same error list as any other rule violation.
//! Only a body that is not JSON, or a field of the wrong JSON type, is
//! rejected before validation runs.

use crate::domain::{Report, Weather};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const MIN_ID_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 10;
const MIN_WORKER_LEN: usize = 3;
const ISO_DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Body of `POST /reports` and `PUT /reports/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    pub id: Option<String>,
    pub date: Option<String>,
    pub weather: Option<String>,
    pub description: Option<String>,
    pub workers: Option<Vec<String>>,
}

/// One rule violation, addressed by a dotted path such as `body.workers.1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ReportRequest {
    /// Validate every field and build the canonical report
    ///
    /// All violations are collected, not just the first one. The returned
    /// report has an empty `provider_record_id`.
    pub fn into_report(self) -> Result<Report, Vec<FieldError>> {
        let mut errors = Vec::new();

        let id = required(self.id, "body.id", &mut errors);
        if let Some(id) = &id {
            if id.chars().count() < MIN_ID_LEN {
                errors.push(FieldError::new(
                    "body.id",
                    format!("Report id must be at least {MIN_ID_LEN} characters"),
                ));
            }
        }

        let date = required(self.date, "body.date", &mut errors);
        if let Some(date) = &date {
            if !is_iso_date(date) {
                errors.push(FieldError::new(
                    "body.date",
                    "Date must be a valid calendar date (YYYY-MM-DD)",
                ));
            }
        }

        let weather = required(self.weather, "body.weather", &mut errors);
        if let Some(weather) = &weather {
            if let Err(message) = Weather::from_str(weather) {
                errors.push(FieldError::new("body.weather", message));
            }
        }

        let description = required(self.description, "body.description", &mut errors);
        if let Some(description) = &description {
            if description.chars().count() < MIN_DESCRIPTION_LEN {
                errors.push(FieldError::new(
                    "body.description",
                    format!("Description must be at least {MIN_DESCRIPTION_LEN} characters"),
                ));
            }
        }

        let workers = required(self.workers, "body.workers", &mut errors);
        if let Some(workers) = &workers {
            if workers.is_empty() {
                errors.push(FieldError::new(
                    "body.workers",
                    "Crew must contain at least 1 worker",
                ));
            }
            for (index, worker) in workers.iter().enumerate() {
                if worker.chars().count() < MIN_WORKER_LEN {
                    errors.push(FieldError::new(
                        format!("body.workers.{index}"),
                        format!("Worker name must be at least {MIN_WORKER_LEN} characters"),
                    ));
                }
            }
        }

        match (id, date, weather, description, workers) {
            (Some(id), Some(date), Some(weather), Some(description), Some(workers))
                if errors.is_empty() =>
            {
                Ok(Report::new(id, date, weather, description, workers))
            }
            _ => Err(errors),
        }
    }
}

/// Strict `YYYY-MM-DD` that is also a real calendar date
///
/// chrono alone accepts unpadded fields, signed years and leading whitespace.
fn is_iso_date(value: &str) -> bool {
    Regex::new(ISO_DATE_PATTERN).is_ok_and(|re| re.is_match(value))
        && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn required<T>(value: Option<T>, path: &str, errors: &mut Vec<FieldError>) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::new(path, "Required"));
    }
    value
}
