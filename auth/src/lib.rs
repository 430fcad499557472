//! Authentication utilities library
//!
//! Self-contained credential and token handling for the attendance service:
//! - Password hashing (scrypt, `"<hex-salt>:<hex-key>"` credentials)
//! - HS256 token issuing and validation built from HMAC-SHA256 and base64url
//! - Authentication coordination
//!
//! Nothing here reads global state: the signing secret arrives through
//! [`AuthConfig`] and time through a [`Clock`].
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{AuthConfig, Claims, JwtHandler, Secret};
//!
//! let config = AuthConfig::new(Secret::new("secret_key_at_least_32_bytes_long!").unwrap());
//! let handler = JwtHandler::new(&config);
//! let claims = Claims::new().with_extra("email", "a@b.com").with_extra("role", "admin");
//! let token = handler.issue(&claims, 3600).unwrap();
//! let decoded = handler.validate(&token).unwrap();
//! assert_eq!(decoded.role(), Some("admin"));
//! assert_eq!(decoded.expires_at().unwrap() - decoded.issued_at().unwrap(), 3600);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthConfig, Authenticator, Claims, Secret};
//!
//! let config = AuthConfig::new(Secret::new("secret_key_at_least_32_bytes_long!").unwrap());
//! let auth = Authenticator::new(&config);
//!
//! // Provision: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("1", "admin@example.com", "admin");
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.subject(), Some("1"));
//! ```

pub mod authenticator;
pub mod clock;
pub mod compare;
pub mod config;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use compare::constant_time_eq;
pub use config::AuthConfig;
pub use config::Secret;
pub use config::SecretError;
pub use config::DEFAULT_TOKEN_TTL_SECONDS;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::StoredCredential;
