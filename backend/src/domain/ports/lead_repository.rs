//! Port for lead persistence.
//!
//! The [`LeadRepository`] trait is the only way the domain touches storage.
//! Adapters assign the identifier and creation timestamp; the domain hands
//! them nothing but a validated [`NewLead`].

use async_trait::async_trait;

use crate::domain::{Lead, NewLead};

/// Errors raised by lead repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadRepositoryError {
    /// Repository connection could not be established.
    #[error("lead repository connection failed: {message}")]
    Connection {
        /// Adapter-provided description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("lead repository query failed: {message}")]
    Query {
        /// Adapter-provided description.
        message: String,
    },
}

impl LeadRepositoryError {
    /// Build a [`LeadRepositoryError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`LeadRepositoryError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for lead storage and retrieval.
///
/// # Contract
///
/// - `create` persists exactly one record per call and returns it with a
///   fresh identifier and creation timestamp. No deduplication happens.
/// - `list` returns every stored lead in creation order. Adapters without a
///   reliable clock ordering fall back to insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Persist a validated submission.
    async fn create(&self, lead: NewLead) -> Result<Lead, LeadRepositoryError>;

    /// Return all stored leads.
    async fn list(&self) -> Result<Vec<Lead>, LeadRepositoryError>;
}
