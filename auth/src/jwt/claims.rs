use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Claim names owned by the token codec.
pub const ISSUED_AT: &str = "iat";
pub const EXPIRES_AT: &str = "exp";

/// Ordered set of token claims.
///
/// Keeps insertion order so a token payload serializes the claims in the
/// order the issuer added them. Values are arbitrary JSON; the accessors
/// below cover the claims the attendance service relies on (`sub`, `email`,
/// `role`) plus the codec-managed `iat` / `exp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims describing an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier (`sub`)
    /// * `email` - Login email (`email`)
    /// * `role` - Authorization role (`role`)
    pub fn for_user(user_id: impl ToString, email: impl ToString, role: impl ToString) -> Self {
        Self::new()
            .with_subject(user_id)
            .with_extra("email", email.to_string())
            .with_extra("role", role.to_string())
    }

    /// Set subject.
    pub fn with_subject(self, sub: impl ToString) -> Self {
        self.with_extra("sub", sub.to_string())
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.0.insert(key.to_string(), json_value);
        }
        self
    }

    /// Insert a claim, returning the previous value if there was one.
    ///
    /// Replacing an existing claim keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn subject(&self) -> Option<&str> {
        self.get_str("sub")
    }

    pub fn email(&self) -> Option<&str> {
        self.get_str("email")
    }

    pub fn role(&self) -> Option<&str> {
        self.get_str("role")
    }

    /// Issued-at time (Unix seconds), when present and integral.
    pub fn issued_at(&self) -> Option<i64> {
        self.get(ISSUED_AT).and_then(Value::as_i64)
    }

    /// Expiration time (Unix seconds), when present and integral.
    pub fn expires_at(&self) -> Option<i64> {
        self.get(EXPIRES_AT).and_then(Value::as_i64)
    }

    /// Check if the claims are expired at `current_timestamp`.
    ///
    /// A token stops being valid at the instant `exp` is reached. A
    /// non-numeric `exp` counts as expired; claims without `exp` never expire.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        match self.get(EXPIRES_AT) {
            None => false,
            Some(exp) => match exp.as_f64() {
                Some(exp) => exp <= current_timestamp as f64,
                None => true,
            },
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new().with_subject("user123");
        assert_eq!(claims.subject(), Some("user123"));
        assert!(claims.expires_at().is_none());
    }

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("1", "a@b.com", "admin");

        assert_eq!(claims.subject(), Some("1"));
        assert_eq!(claims.email(), Some("a@b.com"));
        assert_eq!(claims.role(), Some("admin"));
        assert!(claims.issued_at().is_none());
    }

    #[test]
    fn test_builder_keeps_insertion_order() {
        let claims = Claims::new()
            .with_extra("role", "admin")
            .with_subject("user123")
            .with_extra("scopes", vec!["read", "write"]);

        let keys: Vec<&str> = claims.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["role", "sub", "scopes"]);
        assert_eq!(claims.get("scopes"), Some(&json!(["read", "write"])));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut claims = Claims::new()
            .with_extra("exp", 1)
            .with_extra("email", "a@b.com");

        let previous = claims.insert("exp", json!(99));

        assert_eq!(previous, Some(json!(1)));
        let keys: Vec<&str> = claims.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["exp", "email"]);
        assert_eq!(claims.expires_at(), Some(99));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new().with_extra(EXPIRES_AT, 1000);

        assert!(!claims.is_expired(999)); // Not expired
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_is_expired_no_exp_claim() {
        let claims = Claims::new();
        assert!(!claims.is_expired(9999999999)); // Never expires without exp
    }

    #[test]
    fn test_is_expired_non_numeric_exp() {
        let claims = Claims::new().with_extra(EXPIRES_AT, "tomorrow");
        assert!(claims.is_expired(0));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let claims = Claims::for_user("1", "a@b.com", "admin");
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"sub":"1","email":"a@b.com","role":"admin"}"#);
    }
}
