//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (storage) expose strongly typed errors so adapters map their
//! failures into predictable variants. Driving ports (use cases) return the
//! domain [`crate::domain::Error`] that inbound adapters translate to HTTP.

mod intake;
mod lead_repository;

#[cfg(test)]
pub use intake::{MockLeadSubmissionCommand, MockLeadsQuery};
pub use intake::{LeadSubmissionCommand, LeadsQuery};
#[cfg(test)]
pub use lead_repository::MockLeadRepository;
pub use lead_repository::{LeadRepository, LeadRepositoryError};
