use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::RoleError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents an account allowed to sign in to the attendance backend
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub role: Role,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates format using RFC 5322 compliant parser. Stored lowercase so
/// lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string (surrounding whitespace is ignored)
    ///
    /// # Returns
    /// Validated, lowercased EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Authorization role carried in the `role` token claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Docente,
    Administrativo,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Docente, Role::Administrativo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Docente => "docente",
            Role::Administrativo => "administrativo",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub email: EmailAddress,
    pub role: Role,
    pub display_name: String,
    pub password: String,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `role` - Authorization role
    /// * `display_name` - Human readable name
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(email: EmailAddress, role: Role, display_name: String, password: String) -> Self {
        Self {
            email,
            role,
            display_name,
            password,
        }
    }
}

/// Credentials presented at login.
///
/// The email is kept raw: a malformed address is just a failed login.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub expires_in: i64,
}
