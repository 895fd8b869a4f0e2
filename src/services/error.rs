use thiserror::Error;

/// Errors surfaced by the directory services.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for DirectoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for DirectoryError {
    fn from(err: anyhow::Error) -> Self {
        // Repositories wrap `DbErr` in anyhow context.
        if err.downcast_ref::<sea_orm::DbErr>().is_some() {
            Self::Database(format!("{err:#}"))
        } else {
            Self::Internal(format!("{err:#}"))
        }
    }
}
