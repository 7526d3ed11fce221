//! Migrate command - Bootstrap the users table without starting the server.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::open(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    db.ensure_schema().await?;
    tracing::info!("Users table is in place");

    Ok(())
}
