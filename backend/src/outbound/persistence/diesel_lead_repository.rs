//! PostgreSQL-backed `LeadRepository` implementation using Diesel ORM.
//!
//! The database assigns `id` (`gen_random_uuid()`) and `created_at`
//! (`now()`), and the inserted row is read back with `RETURNING` in the same
//! statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{LeadRepository, LeadRepositoryError};
use crate::domain::{Lead, LeadId, LeadName, LeadValidationError, NewLead, PhoneNumber};

use super::models::{LeadRow, NewLeadRow};
use super::pool::{DbPool, PoolError};
use super::schema::leads;

/// Diesel-backed implementation of the [`LeadRepository`] port.
#[derive(Clone)]
pub struct DieselLeadRepository {
    pool: DbPool,
}

impl DieselLeadRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LeadRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            LeadRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> LeadRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => LeadRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => LeadRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            LeadRepositoryError::connection("database connection error")
        }
        _ => LeadRepositoryError::query("database error"),
    }
}

/// Rebuild a domain lead from a stored row, re-checking the field rules.
fn row_to_lead(row: LeadRow) -> Result<Lead, LeadRepositoryError> {
    let LeadRow {
        id,
        name,
        phone,
        created_at,
    } = row;
    let invalid = |err: LeadValidationError| {
        LeadRepositoryError::query(format!("stored lead {id} is invalid: {err:?}"))
    };
    let name = LeadName::new(name).map_err(invalid)?;
    let phone = PhoneNumber::new(phone).map_err(invalid)?;
    Ok(Lead::new(
        LeadId::from_uuid(id),
        NewLead::new(name, phone),
        created_at,
    ))
}

#[async_trait]
impl LeadRepository for DieselLeadRepository {
    async fn create(&self, lead: NewLead) -> Result<Lead, LeadRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewLeadRow {
            name: lead.name().as_ref(),
            phone: lead.phone().as_ref(),
        };

        let stored: LeadRow = diesel::insert_into(leads::table)
            .values(&row)
            .returning(LeadRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_lead(stored)
    }

    async fn list(&self) -> Result<Vec<Lead>, LeadRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<LeadRow> = leads::table
            .order((leads::created_at.asc(), leads::id.asc()))
            .select(LeadRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_lead).collect()
    }
}
