use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::StudentData;
use super::STUDENT_WRITERS;
use crate::domain::classroom::errors::ClassroomIdError;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::student::errors::NameError;
use crate::domain::student::models::PersonName;
use crate::domain::student::models::StudentId;
use crate::domain::student::models::UpdateStudentCommand;
use crate::domain::student::ports::StudentServicePort;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_student(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(student_id): Path<String>,
    Json(body): Json<UpdateStudentRequest>,
) -> Result<ApiSuccess<StudentData>, ApiError> {
    user.require_role(&STUDENT_WRITERS)?;

    let id = StudentId::from_string(&student_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid student ID: {}", e)))?;

    state
        .student_service
        .update_student(&id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref student| ApiSuccess::new(StatusCode::OK, student.into()))
}

/// HTTP request body for a partial student update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    classroom_id: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateStudentRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid classroom ID: {0}")]
    ClassroomId(#[from] ClassroomIdError),
}

impl UpdateStudentRequest {
    fn try_into_command(self) -> Result<UpdateStudentCommand, ParseUpdateStudentRequestError> {
        Ok(UpdateStudentCommand {
            first_name: self
                .first_name
                .map(|name| PersonName::new("firstName", name))
                .transpose()?,
            last_name: self
                .last_name
                .map(|name| PersonName::new("lastName", name))
                .transpose()?,
            email: self.email.map(EmailAddress::new).transpose()?,
            classroom_id: self
                .classroom_id
                .as_deref()
                .map(ClassroomId::from_string)
                .transpose()?,
        })
    }
}

impl From<ParseUpdateStudentRequestError> for ApiError {
    fn from(err: ParseUpdateStudentRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
