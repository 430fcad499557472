use rand::rngs::OsRng;
use rand::RngCore;
use scrypt::Params;

use super::credential::StoredCredential;
use super::errors::PasswordError;
use crate::compare::constant_time_eq;

/// Bytes of entropy in every freshly generated salt.
pub const SALT_LENGTH: usize = 16;

/// Length of the derived key in bytes.
pub const KEY_LENGTH: usize = 64;

/// scrypt cost parameter N = 2^14 = 16384.
const LOG_N: u8 = 14;
const BLOCK_SIZE: u32 = 8;
const PARALLELISM: u32 = 1;

/// Password hashing implementation.
///
/// Provides salted password hashing (internally uses scrypt with
/// N=16384, r=8, p=1 and a 64-byte output). Stored credentials have the
/// layout `"<hex-salt>:<hex-derived-key>"`.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher configured with the single supported KDF profile
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password.
    ///
    /// Every call draws a new salt from the OS random source, so hashing the
    /// same password twice yields different credentials.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Stored credential string `"<hex-salt>:<hex-derived-key>"`
    ///
    /// # Errors
    /// * `HashingFailed` - The KDF rejected its parameters (not expected at runtime)
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);
        let salt = hex::encode(salt);

        let derived_key = self.derive(password, &salt)?;

        Ok(StoredCredential::new(salt, derived_key).to_string())
    }

    /// Verify a password against a stored credential.
    ///
    /// Never fails: a malformed credential is a mismatch.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored` - Credential previously produced by [`PasswordHasher::hash`]
    ///
    /// # Returns
    /// True only if the recomputed key equals the stored key
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let credential = match StoredCredential::parse(stored) {
            Ok(credential) => credential,
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting stored credential");
                return false;
            }
        };

        match self.derive(password, credential.salt()) {
            Ok(derived_key) => constant_time_eq(&derived_key, credential.derived_key()),
            Err(e) => {
                tracing::error!(error = %e, "Key derivation failed during verification");
                false
            }
        }
    }

    fn derive(&self, password: &str, salt: &str) -> Result<Vec<u8>, PasswordError> {
        let params = Params::new(LOG_N, BLOCK_SIZE, PARALLELISM, KEY_LENGTH)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let mut output = vec![0u8; KEY_LENGTH];
        scrypt::scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut output)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
        Ok(output)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Produced by an independent scrypt implementation with the same profile.
    const KNOWN_CREDENTIAL: &str = "0123456789abcdef0123456789abcdef:3ea3014ff7884903c71739715a5255c26662c997bd0039aac76b7ae069442cff5d77790109b301117e344bdd5d664dcc72e50c109c8ab61820aab13209d99e68";

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        // Hash the password
        let hash = hasher.hash(password).expect("Failed to hash password");

        // Verify correct password
        assert!(hasher.verify(password, &hash));

        // Verify incorrect password
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_format() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password").expect("Failed to hash password");

        let (salt, key) = hash.split_once(':').expect("missing separator");
        assert_eq!(salt.len(), SALT_LENGTH * 2);
        assert_eq!(key.len(), KEY_LENGTH * 2);
        assert!(hash
            .chars()
            .all(|c| c == ':' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_hash_uses_fresh_salt() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").expect("Failed to hash password");
        let second = hasher.hash("same_password").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("same_password", &first));
        assert!(hasher.verify("same_password", &second));
    }

    #[test]
    fn test_verify_known_credential() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("Admin123!", KNOWN_CREDENTIAL));
        assert!(!hasher.verify("Admin123?", KNOWN_CREDENTIAL));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("password", "not-a-valid-hash-format"));
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "salt:"));
        assert!(!hasher.verify("password", ":abcd"));
        assert!(!hasher.verify("password", "salt:not-hex"));
    }

    #[test]
    fn test_verify_truncated_key_is_mismatch() {
        let hasher = PasswordHasher::new();
        let truncated = &KNOWN_CREDENTIAL[..KNOWN_CREDENTIAL.len() - 2];
        assert!(!hasher.verify("Admin123!", truncated));
    }
}
