use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to prepare the session store.
    #[error("Failed to initialize session store: {0}")]
    Session(String),
}
