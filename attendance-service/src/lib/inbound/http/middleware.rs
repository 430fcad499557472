use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::Role;
use crate::inbound::http::router::AppState;

const INVALID_TOKEN: &str = "Invalid or expired token";
const MISSING_TOKEN: &str = "Missing bearer token";

/// Extension type to store the authenticated principal in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Allow the request only for the listed roles.
    ///
    /// # Errors
    /// * `Forbidden` - Valid token, role not in `allowed`
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), ApiError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.user_id,
                role = %self.role,
                "Insufficient role for request"
            );
            Err(ApiError::Forbidden(
                "Insufficient permissions for this operation".to_string(),
            ))
        }
    }
}

/// Middleware that validates bearer tokens and adds the principal to request extensions
///
/// Every token failure (malformed, forged, expired, unusable claims) maps to
/// the same 401 response.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate token and extract claims (from auth library)
    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized(INVALID_TOKEN.to_string())
    })?;

    let (Some(user_id), Some(email), Some(role)) =
        (claims.subject(), claims.email(), claims.role())
    else {
        tracing::warn!("Token is missing identity claims");
        return Err(ApiError::Unauthorized(INVALID_TOKEN.to_string()));
    };

    let role: Role = role.parse().map_err(|e| {
        tracing::warn!(error = %e, "Token carries an unknown role");
        ApiError::Unauthorized(INVALID_TOKEN.to_string())
    })?;

    let user = AuthenticatedUser {
        user_id: user_id.to_string(),
        email: email.to_string(),
        role,
    };

    // Add authenticated user info to request extensions
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized(MISSING_TOKEN.to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized(MISSING_TOKEN.to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized(MISSING_TOKEN.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "1".to_string(),
            email: "a@b.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_require_role() {
        let allowed = [Role::Admin, Role::Administrativo];

        assert!(user(Role::Admin).require_role(&allowed).is_ok());
        assert!(user(Role::Administrativo).require_role(&allowed).is_ok());
        assert!(matches!(
            user(Role::Docente).require_role(&allowed),
            Err(ApiError::Forbidden(_))
        ));
    }
}
