//! Driving ports for lead intake.
//!
//! Inbound adapters (HTTP handlers) depend on these traits rather than on the
//! service type, so handler tests can substitute mocks and the server can
//! swap storage without touching the routes.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, Lead};

/// Use-case port for capturing a lead from an untyped request body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSubmissionCommand: Send + Sync {
    /// Validate `payload` and persist it as a new lead.
    ///
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] with flattened
    /// field messages in `details` when validation fails, and
    /// [`crate::domain::ErrorCode::InternalError`] when storage fails.
    async fn submit(&self, payload: Value) -> Result<Lead, Error>;
}

/// Use-case port for reading captured leads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadsQuery: Send + Sync {
    /// Return every stored lead in creation order.
    async fn list_leads(&self) -> Result<Vec<Lead>, Error>;
}
