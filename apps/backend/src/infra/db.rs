//! Record store connection plumbing.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::DbConfig;
use crate::error::AppError;

/// Open the connection pool. Pool bounds come from config so deployment
/// can size the number of simultaneous in-flight transactions.
pub async fn connect_db(cfg: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.min_connections(cfg.min_connections)
        .max_connections(cfg.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Single entrypoint used by the binary: connect, then bring the schema
/// up to date.
pub async fn bootstrap_db(cfg: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let db = connect_db(cfg).await?;
    Migrator::up(&db, None).await?;
    info!("database connected and migrated");
    Ok(db)
}
