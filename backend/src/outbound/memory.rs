//! In-process lead storage.
//!
//! Used when no database URL is configured and by the behaviour tests.
//! Contents are lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::ports::{LeadRepository, LeadRepositoryError};
use crate::domain::{Lead, LeadId, NewLead};

/// Lead repository backed by a `Vec` behind an async lock.
///
/// Identifiers are random v4 UUIDs; listing returns insertion order.
#[derive(Debug, Default)]
pub struct InMemoryLeadRepository {
    leads: RwLock<Vec<Lead>>,
}

impl InMemoryLeadRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored leads.
    pub async fn len(&self) -> usize {
        self.leads.read().await.len()
    }

    /// Whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.leads.read().await.is_empty()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn create(&self, lead: NewLead) -> Result<Lead, LeadRepositoryError> {
        let lead = Lead::new(LeadId::random(), lead, Utc::now());
        self.leads.write().await.push(lead.clone());
        Ok(lead)
    }

    async fn list(&self) -> Result<Vec<Lead>, LeadRepositoryError> {
        Ok(self.leads.read().await.clone())
    }
}
