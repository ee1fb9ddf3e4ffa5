//! Lead aggregate and its validated parts.
//!
//! A lead is a contact request (name + phone) left on the landing page.
//! Values are validated with the shared rules in `lead_contract`, so the form
//! and the service agree on what is acceptable.

use std::fmt;

use chrono::{DateTime, Utc};
use lead_contract::{FieldViolation, FlattenedErrors, LeadField, check_name, check_phone};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use super::Error;

/// Summary message for rejected submissions.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// Validation failure for a lead payload.
///
/// Wraps the flattened per-field messages returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lead payload failed validation")]
pub struct LeadValidationError(FlattenedErrors);

impl LeadValidationError {
    fn field(field: LeadField, violations: Vec<FieldViolation>) -> Self {
        let mut errors = FlattenedErrors::default();
        errors.extend_field(field, violations);
        Self(errors)
    }

    /// Failure that concerns the body as a whole rather than one field.
    pub fn form(message: impl Into<String>) -> Self {
        Self(FlattenedErrors::form(message))
    }

    /// Per-field messages describing the failure.
    pub fn errors(&self) -> &FlattenedErrors {
        &self.0
    }

    /// Consume the error, returning the flattened messages.
    pub fn into_errors(self) -> FlattenedErrors {
        self.0
    }
}

impl From<LeadValidationError> for Error {
    fn from(err: LeadValidationError) -> Self {
        let errors = err.into_errors();
        Error::invalid_request(INVALID_INPUT_MESSAGE).with_details(json!({
            "formErrors": errors.form_errors,
            "fieldErrors": errors.field_errors,
        }))
    }
}

/// Storage-assigned lead identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(Uuid);

impl LeadId {
    /// Wrap an identifier produced by storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh identifier for storage adapters that assign ids
    /// in-process.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact name: trimmed, at least two characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LeadName(String);

impl LeadName {
    /// Validate and trim a raw name.
    ///
    /// # Examples
    /// ```
    /// use lead_intake::domain::LeadName;
    ///
    /// let name = LeadName::new("  Al ").expect("valid name");
    /// assert_eq!(name.as_ref(), "Al");
    /// assert!(LeadName::new("A").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LeadValidationError> {
        check_name(raw.as_ref())
            .map(Self)
            .map_err(|violations| LeadValidationError::field(LeadField::Name, violations))
    }
}

impl AsRef<str> for LeadName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<LeadName> for String {
    fn from(value: LeadName) -> Self {
        value.0
    }
}

impl TryFrom<String> for LeadName {
    type Error = LeadValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Contact phone number: trimmed, at least nine characters drawn from
/// digits, `+` and whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and trim a raw phone number.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LeadValidationError> {
        check_phone(raw.as_ref())
            .map(Self)
            .map_err(|violations| LeadValidationError::field(LeadField::Phone, violations))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = LeadValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated, narrowed submission handed to storage.
///
/// The only way to build one from client input is
/// [`NewLead::try_from_payload`], which keeps the raw body away from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    name: LeadName,
    phone: PhoneNumber,
}

impl NewLead {
    /// Assemble a submission from already validated parts.
    pub fn new(name: LeadName, phone: PhoneNumber) -> Self {
        Self { name, phone }
    }

    /// Narrow an untyped request body into a validated submission.
    ///
    /// Every problem is collected: a body with a short name and a malformed
    /// phone reports both. Unknown members are ignored.
    ///
    /// # Examples
    /// ```
    /// use lead_intake::domain::NewLead;
    /// use lead_contract::LeadField;
    /// use serde_json::json;
    ///
    /// let lead = NewLead::try_from_payload(&json!({ "name": "Al", "phone": "600111222" }))
    ///     .expect("valid payload");
    /// assert_eq!(lead.name().as_ref(), "Al");
    ///
    /// let err = NewLead::try_from_payload(&json!({ "name": "Al" })).expect_err("missing phone");
    /// assert_eq!(err.errors().field(LeadField::Phone), ["phone is required"]);
    /// ```
    pub fn try_from_payload(payload: &Value) -> Result<Self, LeadValidationError> {
        let Some(object) = payload.as_object() else {
            return Err(LeadValidationError::form(
                "expected a JSON object with name and phone",
            ));
        };

        let mut errors = FlattenedErrors::default();
        let name = read_field(object, LeadField::Name, check_name, &mut errors);
        let phone = read_field(object, LeadField::Phone, check_phone, &mut errors);

        match (name, phone) {
            (Some(name), Some(phone)) => Ok(Self {
                name: LeadName(name),
                phone: PhoneNumber(phone),
            }),
            _ => Err(LeadValidationError(errors)),
        }
    }

    /// Validated contact name.
    pub fn name(&self) -> &LeadName {
        &self.name
    }

    /// Validated phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Split into parts for storage adapters.
    pub fn into_parts(self) -> (LeadName, PhoneNumber) {
        (self.name, self.phone)
    }
}

type FieldCheck = fn(&str) -> Result<String, Vec<FieldViolation>>;

fn read_field(
    object: &Map<String, Value>,
    field: LeadField,
    check: FieldCheck,
    errors: &mut FlattenedErrors,
) -> Option<String> {
    let outcome = match object.get(field.as_str()) {
        None | Some(Value::Null) => Err(vec![FieldViolation::Missing]),
        Some(Value::String(raw)) => check(raw),
        Some(_) => Err(vec![FieldViolation::NotText]),
    };
    match outcome {
        Ok(value) => Some(value),
        Err(violations) => {
            errors.extend_field(field, violations);
            None
        }
    }
}

/// Persisted lead.
///
/// ## Invariants
/// - `id` and `created_at` come from storage and never change.
/// - `name` and `phone` satisfy the shared field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    id: LeadId,
    name: LeadName,
    phone: PhoneNumber,
    created_at: DateTime<Utc>,
}

impl Lead {
    /// Combine a validated submission with its storage-assigned metadata.
    pub fn new(id: LeadId, lead: NewLead, created_at: DateTime<Utc>) -> Self {
        let (name, phone) = lead.into_parts();
        Self {
            id,
            name,
            phone,
            created_at,
        }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> LeadId {
        self.id
    }

    /// Contact name.
    pub fn name(&self) -> &LeadName {
        &self.name
    }

    /// Contact phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
