use std::fmt;

use thiserror::Error;

/// Token lifetime used when the caller does not pick one.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;

/// Error for invalid authentication configuration.
///
/// These are startup failures: a process that cannot build its
/// `AuthConfig` must not serve requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("Signing secret must not be empty")]
    Empty,

    #[error("Token lifetime must be positive, got {0} seconds")]
    InvalidTtl(i64),
}

/// Symmetric key used to sign and verify tokens.
///
/// Immutable once built. `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Build a secret from raw key bytes.
    ///
    /// # Errors
    /// * `Empty` - No key material was supplied
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SecretError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret([REDACTED; {} bytes])", self.0.len())
    }
}

/// Process-wide authentication settings.
///
/// Loaded once at startup and handed by reference to the components
/// that need it.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: Secret,
    pub token_ttl_seconds: i64,
}

impl AuthConfig {
    /// Create configuration with the default token lifetime.
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    /// Build configuration from a raw secret and lifetime.
    ///
    /// # Arguments
    /// * `secret` - Key material (must be non-empty)
    /// * `token_ttl_seconds` - Lifetime of issued tokens (must be positive)
    ///
    /// # Errors
    /// * `Empty` - Secret is empty
    /// * `InvalidTtl` - Lifetime is zero or negative
    pub fn from_parts(
        secret: impl Into<Vec<u8>>,
        token_ttl_seconds: i64,
    ) -> Result<Self, SecretError> {
        if token_ttl_seconds <= 0 {
            return Err(SecretError::InvalidTtl(token_ttl_seconds));
        }
        Ok(Self {
            secret: Secret::new(secret)?,
            token_ttl_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(Secret::new(Vec::new()), Err(SecretError::Empty));
        assert_eq!(Secret::new(""), Err(SecretError::Empty));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let secret = Secret::new("super-secret").unwrap();
        let printed = format!("{:?}", secret);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("REDACTED"));
    }

    #[test]
    fn test_from_parts() {
        let config = AuthConfig::from_parts("secret", 60).unwrap();
        assert_eq!(config.secret.as_bytes(), b"secret");
        assert_eq!(config.token_ttl_seconds, 60);

        assert_eq!(
            AuthConfig::from_parts("secret", 0).unwrap_err(),
            SecretError::InvalidTtl(0)
        );
        assert_eq!(
            AuthConfig::from_parts("", 60).unwrap_err(),
            SecretError::Empty
        );
    }

    #[test]
    fn test_default_ttl() {
        let config = AuthConfig::new(Secret::new("secret").unwrap());
        assert_eq!(config.token_ttl_seconds, 3600);
    }
}
