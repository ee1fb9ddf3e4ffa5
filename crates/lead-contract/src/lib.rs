//! Wire contract for barbershop lead capture.
//!
//! The intake service and the capture form both validate through this crate,
//! so a submission the form accepts locally is one the service accepts too.
//!
//! - [`rules`] holds the per-field checks and their thresholds.
//! - [`FlattenedErrors`] is the `formErrors` / `fieldErrors` shape returned
//!   in the `details` member of a 400 response.
//! - [`LeadSubmission`], [`LeadRecord`] and [`ErrorBody`] are the JSON bodies
//!   exchanged over `POST /api/leads` and `GET /api/leads`.

mod errors;
mod payload;
pub mod rules;

pub use errors::FlattenedErrors;
pub use payload::{ErrorBody, LeadRecord, LeadSubmission, validate_submission};
pub use rules::{
    FieldViolation, LeadField, NAME_MIN_CHARS, PHONE_MIN_CHARS, check_name, check_phone,
};
