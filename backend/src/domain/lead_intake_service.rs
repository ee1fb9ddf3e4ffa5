//! Lead intake domain service.
//!
//! Implements the driving ports for submitting and listing leads. Payloads
//! are validated before any side effect, so storage only ever sees a
//! [`NewLead`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::domain::ports::{
    LeadRepository, LeadRepositoryError, LeadSubmissionCommand, LeadsQuery,
};
use crate::domain::{Error, Lead, LeadValidationError, NewLead};

/// Lead intake service implementing the driving ports.
#[derive(Clone)]
pub struct LeadIntakeService<R> {
    repository: Arc<R>,
}

impl<R> LeadIntakeService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> LeadIntakeService<R>
where
    R: LeadRepository,
{
    fn map_repository_error(operation: &'static str, err: LeadRepositoryError) -> Error {
        error!(operation, error = %err, "lead storage failed");
        Error::internal(format!("lead {operation} failed: {err}"))
    }

    fn invalid_input(err: LeadValidationError) -> Error {
        let errors = err.errors();
        debug!(
            fields = ?errors.field_errors.keys().collect::<Vec<_>>(),
            form_errors = errors.form_errors.len(),
            "rejected lead submission"
        );
        Error::from(err)
    }
}

#[async_trait]
impl<R> LeadSubmissionCommand for LeadIntakeService<R>
where
    R: LeadRepository,
{
    async fn submit(&self, payload: Value) -> Result<Lead, Error> {
        let new_lead = NewLead::try_from_payload(&payload).map_err(Self::invalid_input)?;
        let lead = self
            .repository
            .create(new_lead)
            .await
            .map_err(|err| Self::map_repository_error("create", err))?;
        info!(lead_id = %lead.id(), "lead captured");
        Ok(lead)
    }
}

#[async_trait]
impl<R> LeadsQuery for LeadIntakeService<R>
where
    R: LeadRepository,
{
    async fn list_leads(&self) -> Result<Vec<Lead>, Error> {
        self.repository
            .list()
            .await
            .map_err(|err| Self::map_repository_error("list", err))
    }
}

#[cfg(test)]
#[path = "lead_intake_service_tests.rs"]
mod tests;
