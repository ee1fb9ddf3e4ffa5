//! OpenAPI schema definitions for wire types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON shapes the handlers emit and live in the
//! inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`lead_contract::FlattenedErrors`].
#[derive(ToSchema)]
#[schema(as = FlattenedErrors)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FlattenedErrorsSchema {
    /// Messages about the body as a whole.
    form_errors: Vec<String>,
    /// Messages keyed by field name.
    #[schema(value_type = Object, example = json!({ "phone": ["phone must contain at least 9 characters"] }))]
    field_errors: std::collections::BTreeMap<String, Vec<String>>,
}

/// OpenAPI schema for the error envelope produced by
/// [`crate::inbound::http::error::error_body`].
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Human-readable summary. Internal failures always read
    /// "Internal server error".
    #[schema(example = "Invalid input")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Validation details for invalid input.
    details: Option<FlattenedErrorsSchema>,
    /// Correlation identifier, also returned as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for the `POST /api/leads` body.
#[derive(ToSchema)]
#[schema(as = LeadSubmission)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct LeadSubmissionSchema {
    /// Contact name, at least two characters after trimming.
    #[schema(example = "Ana", min_length = 2)]
    name: String,
    /// Phone number: digits, `+` and spaces, at least nine characters.
    #[schema(example = "+34 600 111 222", min_length = 9, pattern = r"^[0-9+\s]+$")]
    phone: String,
}

/// OpenAPI schema for [`crate::domain::Lead`].
#[derive(ToSchema)]
#[schema(as = Lead)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct LeadSchema {
    /// Storage-assigned identifier.
    #[schema(value_type = String, format = Uuid)]
    id: String,
    /// Contact name.
    name: String,
    /// Contact phone number.
    phone: String,
    /// Creation timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}
