use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}
