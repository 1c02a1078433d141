use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Connects to the SQLite database and ensures the schema exists.
///
/// Switches the database to write-ahead logging so readers keep seeing the last committed
/// snapshot while a single writer holds the write lock, then runs the migrations, which only
/// create the `users` and `games` tables when they are absent.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with tables in place
/// - `Err(AppError::DbErr)` - Failed to connect, set the journal mode, or create tables
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    db.execute_unprepared("PRAGMA journal_mode=WAL").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Resolves when the process receives Ctrl+C, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
