//! Flattened validation error shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rules::{FieldViolation, LeadField};

/// Validation failures grouped by field.
///
/// Serialises as `{"formErrors": [...], "fieldErrors": {"name": [...]}}`.
/// Fields without violations are absent from `fieldErrors`.
///
/// # Examples
/// ```
/// use lead_contract::{FieldViolation, FlattenedErrors, LeadField};
///
/// let mut errors = FlattenedErrors::default();
/// errors.push_field(LeadField::Name, FieldViolation::Missing);
/// assert_eq!(errors.field(LeadField::Name), ["name is required"]);
/// assert!(errors.field(LeadField::Phone).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedErrors {
    /// Errors that apply to the payload as a whole.
    #[serde(default)]
    pub form_errors: Vec<String>,
    /// Messages keyed by field wire name.
    #[serde(default)]
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl FlattenedErrors {
    /// Build a value holding a single payload-level error.
    #[must_use]
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            form_errors: vec![message.into()],
            field_errors: BTreeMap::new(),
        }
    }

    /// Record a payload-level error.
    pub fn push_form_error(&mut self, message: impl Into<String>) {
        self.form_errors.push(message.into());
    }

    /// Record one violation against `field`.
    pub fn push_field(&mut self, field: LeadField, violation: FieldViolation) {
        self.field_errors
            .entry(field.as_str().to_owned())
            .or_default()
            .push(violation.message(field));
    }

    /// Record several violations against `field`.
    pub fn extend_field(
        &mut self,
        field: LeadField,
        violations: impl IntoIterator<Item = FieldViolation>,
    ) {
        for violation in violations {
            self.push_field(field, violation);
        }
    }

    /// Drop every message recorded against `field`.
    pub fn clear_field(&mut self, field: LeadField) {
        self.field_errors.remove(field.as_str());
    }

    /// Messages recorded against `field`, empty when it passed.
    #[must_use]
    pub fn field(&self, field: LeadField) -> &[String] {
        self.field_errors
            .get(field.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether no error of any kind was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.is_empty()
    }
}
