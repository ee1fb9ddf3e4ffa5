//! JSON bodies exchanged over the leads endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::FlattenedErrors;
use crate::rules::{LeadField, check_name, check_phone};

/// Request body for `POST /api/leads`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    /// Contact name as typed.
    pub name: String,
    /// Contact phone number as typed.
    pub phone: String,
}

impl LeadSubmission {
    /// Build a submission from borrowed field values.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Validate both fields of a submission.
///
/// On success the returned submission carries the trimmed values that the
/// service would persist.
///
/// # Errors
/// Returns every field violation found, grouped by field.
///
/// # Examples
/// ```
/// use lead_contract::{LeadField, LeadSubmission, validate_submission};
///
/// let ok = validate_submission(&LeadSubmission::new(" Al ", "600111222")).expect("valid");
/// assert_eq!(ok.name, "Al");
///
/// let err = validate_submission(&LeadSubmission::new("A", "600111222")).expect_err("short");
/// assert_eq!(err.field(LeadField::Name).len(), 1);
/// ```
pub fn validate_submission(submission: &LeadSubmission) -> Result<LeadSubmission, FlattenedErrors> {
    let mut errors = FlattenedErrors::default();

    let name = match check_name(&submission.name) {
        Ok(name) => Some(name),
        Err(violations) => {
            errors.extend_field(LeadField::Name, violations);
            None
        }
    };
    let phone = match check_phone(&submission.phone) {
        Ok(phone) => Some(phone),
        Err(violations) => {
            errors.extend_field(LeadField::Phone, violations);
            None
        }
    };

    match (name, phone) {
        (Some(name), Some(phone)) => Ok(LeadSubmission { name, phone }),
        _ => Err(errors),
    }
}

/// Lead as returned by the intake service.
///
/// `createdAt` is optional so that clients tolerate storage backends which do
/// not report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Storage-assigned identifier.
    pub id: String,
    /// Trimmed contact name.
    pub name: String,
    /// Trimmed contact phone number.
    pub phone: String,
    /// Creation timestamp assigned by storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Error envelope returned by the intake service.
///
/// Invalid input carries `"error": "Invalid input"` with [`FlattenedErrors`]
/// under `details`; internal failures carry only the generic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Human-readable summary.
    pub error: String,
    /// Stable machine-readable error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Structured failure details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ErrorBody {
    /// Decode `details` as flattened validation errors, if present.
    #[must_use]
    pub fn validation_details(&self) -> Option<FlattenedErrors> {
        self.details
            .clone()
            .and_then(|details| serde_json::from_value(details).ok())
    }
}
