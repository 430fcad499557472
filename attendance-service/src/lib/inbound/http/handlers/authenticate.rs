use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let session = state
        .user_service
        .login(LoginCommand {
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(|e| match e {
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token: session.access_token,
            expires_in: session.expires_in,
            user: (&session.user).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponseData {
    pub token: String,
    pub expires_in: i64,
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub role: String,
    pub display_name: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
            display_name: user.display_name.clone(),
        }
    }
}
