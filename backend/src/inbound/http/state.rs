//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! lead driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LeadSubmissionCommand, LeadsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use case behind `POST /api/leads`.
    pub submissions: Arc<dyn LeadSubmissionCommand>,
    /// Use case behind `GET /api/leads`.
    pub leads: Arc<dyn LeadsQuery>,
}

impl HttpState {
    /// Construct state from separate port implementations.
    pub fn new(submissions: Arc<dyn LeadSubmissionCommand>, leads: Arc<dyn LeadsQuery>) -> Self {
        Self { submissions, leads }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use lead_intake::domain::LeadIntakeService;
    /// use lead_intake::inbound::http::state::HttpState;
    /// use lead_intake::outbound::memory::InMemoryLeadRepository;
    ///
    /// let service = LeadIntakeService::new(Arc::new(InMemoryLeadRepository::new()));
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: LeadSubmissionCommand + LeadsQuery + 'static,
    {
        Self {
            submissions: service.clone(),
            leads: service,
        }
    }
}
