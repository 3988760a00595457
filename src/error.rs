use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ProfileError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Duplicate user: {0}")]
    DuplicateUser(String),

    #[error("Profile {0} not found")]
    ProfileNotFound(i64),

    #[error("Config error: {0}")]
    ConfigError(#[from] figment::Error),
}

impl ProfileError {
    /// True when the error came from the storage engine rather than a domain check.
    pub fn is_storage(&self) -> bool {
        matches!(self, ProfileError::DatabaseError(_))
    }
}
