use std::sync::Arc;

use hmac::Hmac;
use hmac::Mac;
use serde_json::Value;
use sha2::Sha256;

use super::claims::Claims;
use super::claims::EXPIRES_AT;
use super::claims::ISSUED_AT;
use super::encoding;
use super::errors::JwtError;
use super::errors::Rejection;
use super::token::Header;
use super::token::TokenParts;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::compare::constant_time_eq;
use crate::config::AuthConfig;
use crate::config::Secret;

type HmacSha256 = Hmac<Sha256>;

/// JWT token handler for issuing and validating tokens.
///
/// Tokens are compact `header.payload.signature` strings signed with
/// HS256 (HMAC with SHA-256). The handler stamps `iat` and `exp` itself and
/// holds no per-token state: validity is recomputed from the token, the
/// secret and the clock.
#[derive(Clone)]
pub struct JwtHandler {
    secret: Secret,
    default_ttl_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl JwtHandler {
    /// Create a new JWT handler reading the system clock.
    ///
    /// # Arguments
    /// * `config` - Signing secret and default token lifetime
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a JWT handler with an explicit time source.
    pub fn with_clock(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: config.secret.clone(),
            default_ttl_seconds: config.token_ttl_seconds,
            clock,
        }
    }

    /// Lifetime applied by [`JwtHandler::issue_default`].
    pub fn default_ttl_seconds(&self) -> i64 {
        self.default_ttl_seconds
    }

    /// Issue a token with the configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_default(&self, claims: &Claims) -> Result<String, JwtError> {
        self.issue(claims, self.default_ttl_seconds)
    }

    /// Sign claims into a compact token.
    ///
    /// `iat` is set to the current time and `exp` to `iat + ttl_seconds`.
    /// Caller-supplied values for either claim are overwritten.
    ///
    /// # Arguments
    /// * `claims` - Claims to embed
    /// * `ttl_seconds` - Seconds until the token expires
    ///
    /// # Returns
    /// Token string `header.payload.signature`
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry overflows or the payload cannot be serialized
    pub fn issue(&self, claims: &Claims, ttl_seconds: i64) -> Result<String, JwtError> {
        let issued_at = self.clock.now();
        let expires_at = issued_at.checked_add(ttl_seconds).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token lifetime {} overflows", ttl_seconds))
        })?;

        let mut payload = claims.clone();
        for (name, value) in [(ISSUED_AT, issued_at), (EXPIRES_AT, expires_at)] {
            if payload.insert(name, Value::from(value)).is_some() {
                tracing::debug!(claim = name, "Overwriting caller-supplied reserved claim");
            }
        }

        let header = serde_json::to_vec(&Header::hs256())
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;
        let payload =
            serde_json::to_vec(&payload).map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        let signing_input = format!("{}.{}", encoding::encode(header), encoding::encode(payload));
        let signature = self.sign(&signing_input)?;

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Validate a token and return its claims.
    ///
    /// The signature is checked before anything in the token is decoded.
    ///
    /// # Arguments
    /// * `token` - Token string to validate
    ///
    /// # Returns
    /// Decoded claims, including `iat` and `exp`
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, mis-signed, undecodable or expired token
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        self.check(token).map_err(|reason| {
            tracing::debug!(reason = %reason, "Token rejected");
            JwtError::from(reason)
        })
    }

    pub(crate) fn check(&self, token: &str) -> Result<Claims, Rejection> {
        let parts = TokenParts::parse(token)?;

        let expected = self
            .sign(&parts.signing_input())
            .map_err(|_| Rejection::BadSignature)?;
        if !constant_time_eq(parts.signature.as_bytes(), expected.as_bytes()) {
            return Err(Rejection::BadSignature);
        }

        let header: Header = decode_segment(parts.header).map_err(|_| Rejection::BadHeader)?;
        if !header.is_supported() {
            return Err(Rejection::BadHeader);
        }

        let claims: Claims = decode_segment(parts.payload)?;

        if claims.is_expired(self.clock.now()) {
            return Err(Rejection::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, signing_input: &str) -> Result<String, JwtError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| JwtError::EncodingFailed(format!("Invalid HMAC key: {}", e)))?;
        mac.update(signing_input.as_bytes());
        Ok(encoding::encode(mac.finalize().into_bytes()))
    }
}

fn decode_segment<T: serde::de::DeserializeOwned>(segment: &str) -> Result<T, Rejection> {
    let bytes = encoding::decode(segment).map_err(|_| Rejection::BadEncoding)?;
    serde_json::from_slice(&bytes).map_err(|_| Rejection::BadPayload)
}
