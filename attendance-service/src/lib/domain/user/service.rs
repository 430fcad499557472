use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Credential checked when the login email is unknown, so that a miss costs
/// the same KDF evaluation as a wrong password.
const DUMMY_PASSWORD: &str = "attendance-service-dummy-password";

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    dummy_hash: String,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuing
    ///
    /// # Errors
    /// * `Password` - The placeholder credential could not be hashed
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Result<Self, UserError> {
        let dummy_hash = authenticator.hash_password(DUMMY_PASSWORD)?;
        Ok(Self {
            repository,
            authenticator,
            dummy_hash,
        })
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(UserError::from)
    }

    /// Burn one verification against the placeholder credential.
    async fn verify_dummy(&self, password: String) -> Result<(), UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let dummy_hash = self.dummy_hash.clone();
        tokio::task::spawn_blocking(move || authenticator.verify_password(&password, &dummy_hash))
            .await
            .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            role: command.role,
            display_name: command.display_name,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "User provisioned"
        );

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, UserError> {
        let user = match EmailAddress::new(command.email) {
            Ok(email) => self.repository.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            self.verify_dummy(command.password).await?;
            tracing::info!("Login rejected");
            return Err(UserError::InvalidCredentials);
        };

        let claims = Claims::for_user(user.id, user.email.as_str(), user.role.as_str());
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = user.password_hash.clone();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::info!(user_id = %user.id, "Login rejected");
                UserError::InvalidCredentials
            }
            AuthenticationError::JwtError(err) => UserError::Token(err),
        })?;

        tracing::info!(user_id = %user.id, role = %user.role, "Login succeeded");

        Ok(Session {
            user,
            access_token: result.access_token,
            expires_in: result.expires_in,
        })
    }
}
