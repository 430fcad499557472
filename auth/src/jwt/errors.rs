use thiserror::Error;

/// Error type for JWT operations.
///
/// Validation has exactly one failure outcome. Why a token was refused is
/// only ever logged, never returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Reason a token was refused. Internal to the codec.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub(crate) enum Rejection {
    #[error("token does not have three non-empty segments")]
    Malformed,

    #[error("signature mismatch")]
    BadSignature,

    #[error("segment is not valid base64url")]
    BadEncoding,

    #[error("header is not a supported HS256 header")]
    BadHeader,

    #[error("payload is not a JSON object")]
    BadPayload,

    #[error("token expired")]
    Expired,
}

impl From<Rejection> for JwtError {
    fn from(_: Rejection) -> Self {
        JwtError::InvalidToken
    }
}
