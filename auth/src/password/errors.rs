use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Malformed stored credential: {0}")]
    MalformedCredential(&'static str),
}
