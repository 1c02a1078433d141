use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to open the in-memory database or create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
