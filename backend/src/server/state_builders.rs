//! Builders for HTTP state backed by the configured lead storage.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use lead_intake::domain::LeadIntakeService;
use lead_intake::domain::ports::LeadRepository;
use lead_intake::inbound::http::state::HttpState;
use lead_intake::outbound::memory::InMemoryLeadRepository;
use lead_intake::outbound::persistence::DieselLeadRepository;

use super::ServerConfig;

fn state_for<R: LeadRepository + 'static>(repository: R) -> HttpState {
    HttpState::from_service(Arc::new(LeadIntakeService::new(Arc::new(repository))))
}

/// Build HTTP state using PostgreSQL when a pool is configured, otherwise an
/// in-memory store that is lost on restart.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => state_for(DieselLeadRepository::new(pool.clone())),
        None => {
            warn!("no database configured; leads are kept in memory only");
            state_for(InMemoryLeadRepository::new())
        }
    };
    web::Data::new(state)
}
