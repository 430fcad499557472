use serde::Deserialize;
use serde::Serialize;

use super::errors::Rejection;

pub const ALGORITHM: &str = "HS256";
pub const TOKEN_TYPE: &str = "JWT";

/// Fixed token header. Serializes as `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl Header {
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: Some(TOKEN_TYPE.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.alg == ALGORITHM
    }
}

/// The three raw segments of a compact token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split a token into `header.payload.signature`.
    ///
    /// Exactly two dots and no empty segment.
    pub(crate) fn parse(token: &'a str) -> Result<Self, Rejection> {
        let mut segments = token.split('.');

        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(Rejection::Malformed);
        };

        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(Rejection::Malformed);
        }

        Ok(Self {
            header,
            payload,
            signature,
        })
    }

    /// The `header.payload` prefix the signature covers.
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }
}
