//! Lead sources: where the directory's rows come from.
//!
//! `AppState` holds an `Arc<dyn LeadSource>`; production uses `PgLeadSource`,
//! tests swap in an in-memory source.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::lead::{Lead, LEAD_COLUMNS};

/// A bulk, read-only view of the leads table.
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Returns every row, in the order the source yields them.
    async fn fetch_all(&self) -> Result<Vec<Lead>, AppError>;
}

/// Reads leads from a Postgres table whose columns are named after the
/// spreadsheet headers (`"First Name"`, `"Company Name"`, ...).
pub struct PgLeadSource {
    pool: PgPool,
    query: String,
}

impl PgLeadSource {
    pub fn new(pool: PgPool, table: &str) -> Self {
        Self {
            pool,
            query: build_select(table),
        }
    }
}

#[async_trait]
impl LeadSource for PgLeadSource {
    async fn fetch_all(&self) -> Result<Vec<Lead>, AppError> {
        debug!("Fetching leads: {}", self.query);

        let leads = sqlx::query_as::<_, Lead>(&self.query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        info!("Fetched {} leads", leads.len());
        Ok(leads)
    }
}

/// Builds the bulk select. Table and column names are quoted identifiers, so
/// spaces and parentheses in them are fine.
fn build_select(table: &str) -> String {
    let columns = LEAD_COLUMNS
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {columns} FROM {}", quote_ident(table))
}

/// Quotes a Postgres identifier, doubling embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
