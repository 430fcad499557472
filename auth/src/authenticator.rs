use std::sync::Arc;

use crate::clock::Clock;
use crate::config::AuthConfig;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `config` - Signing secret and token lifetime
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(config),
        }
    }

    /// Create an authenticator whose tokens follow the given clock.
    pub fn with_clock(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::with_clock(config, clock),
        }
    }

    /// Lifetime of tokens produced by this authenticator.
    pub fn token_ttl_seconds(&self) -> i64 {
        self.jwt_handler.default_ttl_seconds()
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Stored credential string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored credential.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - JWT claims to encode in token
    ///
    /// # Returns
    /// AuthenticationResult with access token and its lifetime
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue_default(claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_in: self.token_ttl_seconds(),
        })
    }

    /// Generate JWT token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(&self, claims: &Claims) -> Result<String, JwtError> {
        self.jwt_handler.issue_default(claims)
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, forged or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Secret;

    fn config() -> AuthConfig {
        AuthConfig::new(Secret::new("test_secret_key_at_least_32_bytes!").unwrap())
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(&config());

        // Hash a password
        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        // Authenticate with correct password
        let claims = Claims::for_user("user123", "alice@example.com", "admin");
        let result = authenticator
            .authenticate(password, &hash, &claims)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(result.expires_in, 3600);

        // Validate the token
        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.subject(), Some("user123"));
        assert_eq!(decoded.role(), Some("admin"));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(&config());

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let claims = Claims::for_user("user123", "alice@example.com", "admin");

        // Try with wrong password
        let result = authenticator.authenticate("wrong_password", &hash, &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash() {
        let authenticator = Authenticator::new(&config());
        let claims = Claims::new().with_subject("user123");

        let result = authenticator.authenticate("password", "not-a-valid-hash-format", &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_generate_and_validate_token() {
        let authenticator = Authenticator::new(&config());

        let claims = Claims::new()
            .with_subject("user123")
            .with_extra("email", "a@b.com");

        let token = authenticator
            .generate_token(&claims)
            .expect("Failed to generate token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");

        assert_eq!(decoded.subject(), Some("user123"));
        assert_eq!(decoded.email(), Some("a@b.com"));
    }

    #[test]
    fn test_token_expires_with_clock() {
        let clock = Arc::new(FixedClock::new(1_000));
        let config = AuthConfig::from_parts("secret", 10).unwrap();
        let authenticator = Authenticator::with_clock(&config, clock.clone());

        let token = authenticator
            .generate_token(&Claims::new().with_subject("user123"))
            .expect("Failed to generate token");

        clock.set(1_009);
        assert!(authenticator.validate_token(&token).is_ok());

        clock.set(1_010);
        assert_eq!(
            authenticator.validate_token(&token),
            Err(JwtError::InvalidToken)
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(&config());

        let result = authenticator.validate_token("invalid.token.here");
        assert_eq!(result, Err(JwtError::InvalidToken));
    }
}
