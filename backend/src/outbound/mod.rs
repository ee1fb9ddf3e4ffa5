//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local lead storage for development and tests
//! - **persistence**: PostgreSQL-backed lead storage using Diesel ORM
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
