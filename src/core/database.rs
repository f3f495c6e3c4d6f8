use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Build the bounded connection pool shared by all repositories.
///
/// Each repository call checks out one connection for the duration of a single
/// statement; sqlx returns it to the pool on drop, including on error paths.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Map constraint violations to client-facing errors, everything else stays a database error
pub fn handle_db_error(e: sqlx::Error) -> crate::core::error::AppError {
    use crate::core::error::AppError;

    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            if let Some(constraint) = db_err.constraint() {
                if constraint.contains("nik") {
                    return AppError::Conflict("NIK sudah terdaftar".to_string());
                }
            }
            return AppError::Conflict("Record already exists".to_string());
        }

        // Foreign key violation (PostgreSQL error code 23503)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::BadRequest("Referenced region does not exist.".to_string());
        }
    }

    AppError::Database(e)
}
