//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the durable [`crate::domain::ports::LeadRepository`] adapter
//! backed by PostgreSQL via `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel failures map to
//!   [`crate::domain::ports::LeadRepositoryError`].
//!
//! # Example
//!
//! ```no_run
//! use lead_intake::outbound::persistence::{
//!     DbPool, DieselLeadRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/leads";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselLeadRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_lead_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_lead_repository::DieselLeadRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
