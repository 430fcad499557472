use std::fmt;

use super::errors::PasswordError;

/// Parsed form of a stored `"<hex-salt>:<hex-derived-key>"` credential.
///
/// The salt stays in its hex text form because that text, not the decoded
/// bytes, is what the KDF consumes. The key is decoded so it can be compared
/// byte for byte.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredential {
    salt: String,
    derived_key: Vec<u8>,
}

impl StoredCredential {
    pub(crate) fn new(salt: String, derived_key: Vec<u8>) -> Self {
        Self { salt, derived_key }
    }

    /// Parse a stored credential string.
    ///
    /// Splits on the first `:`. Both halves must be non-empty and the key half
    /// must be valid hex.
    ///
    /// # Errors
    /// * `MalformedCredential` - Separator missing, empty half, or non-hex key
    pub fn parse(stored: &str) -> Result<Self, PasswordError> {
        let (salt, key) = stored
            .split_once(':')
            .ok_or(PasswordError::MalformedCredential("missing separator"))?;

        if salt.is_empty() {
            return Err(PasswordError::MalformedCredential("empty salt"));
        }
        if key.is_empty() {
            return Err(PasswordError::MalformedCredential("empty derived key"));
        }

        let derived_key = hex::decode(key)
            .map_err(|_| PasswordError::MalformedCredential("derived key is not hex"))?;

        Ok(Self::new(salt.to_string(), derived_key))
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn derived_key(&self) -> &[u8] {
        &self.derived_key
    }
}

impl fmt::Display for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.salt, hex::encode(&self.derived_key))
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("salt", &self.salt)
            .field("derived_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let credential = StoredCredential::parse("abcd:00ff10").unwrap();
        assert_eq!(credential.salt(), "abcd");
        assert_eq!(credential.derived_key(), &[0x00, 0xff, 0x10]);
        assert_eq!(credential.to_string(), "abcd:00ff10");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for stored in [
            "not-a-valid-hash-format",
            "",
            ":",
            "salt:",
            ":00ff",
            "salt:zz",
            "salt:abc",
            "salt:00:ff",
        ] {
            assert!(
                matches!(
                    StoredCredential::parse(stored),
                    Err(PasswordError::MalformedCredential(_))
                ),
                "expected {:?} to be rejected",
                stored
            );
        }
    }
}
