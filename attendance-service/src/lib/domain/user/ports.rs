use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Provision a new account.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, role, name and password
    ///
    /// # Returns
    /// Created user entity (password already hashed)
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Check credentials and open a session.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Session with the signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Token` - Token could not be issued
    async fn login(&self, command: LoginCommand) -> Result<Session, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
