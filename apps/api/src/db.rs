use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool. Connections open on first use, so
/// an unreachable database surfaces as a lead fetch error, not a startup failure.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)?;

    info!("PostgreSQL pool configured");
    Ok(pool)
}
