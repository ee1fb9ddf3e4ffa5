//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed lead entities used by the HTTP and
//! persistence layers, and the service that validates submissions before
//! they reach storage. Types document their invariants and serialisation
//! contracts (serde) in their own Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Lead / NewLead — persisted lead and validated submission.
//! - LeadIntakeService — implements the lead driving ports.
//! - TraceId — request-scoped correlation identifier.

pub mod error;
pub mod lead;
pub mod lead_intake_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::lead::{
    INVALID_INPUT_MESSAGE, Lead, LeadId, LeadName, LeadValidationError, NewLead, PhoneNumber,
};
pub use self::lead_intake_service::LeadIntakeService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use lead_intake::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
