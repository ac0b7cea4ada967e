use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::app::DatabaseSettings;

/// Build the bounded connection pool every query goes through.
///
/// Connections are opened lazily, so the process starts even when the
/// database is unreachable; callers wait at most `acquire_timeout_seconds`
/// for a free connection.
pub fn connection_pool(database_settings: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(database_settings.acquire_timeout())
        .max_connections(database_settings.max_db_connections)
        .connect_lazy_with(database_settings.database_connection_options())
}

/// Check out one connection and log whether the database answered.
#[tracing::instrument(name = "probing database connection", skip(pool))]
pub async fn probe_connection(pool: PgPool) {
    match pool.acquire().await {
        Ok(_) => tracing::info!("connected to the database"),
        Err(e) => tracing::error!(error = %e, "database connection failed"),
    }
}
