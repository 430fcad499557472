use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ClassroomData;
use crate::domain::classroom::errors::GradeError;
use crate::domain::classroom::errors::SectionError;
use crate::domain::classroom::models::CreateClassroomCommand;
use crate::domain::classroom::models::Grade;
use crate::domain::classroom::models::Section;
use crate::domain::classroom::ports::ClassroomServicePort;
use crate::domain::user::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_classroom(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateClassroomRequest>,
) -> Result<ApiSuccess<ClassroomData>, ApiError> {
    user.require_role(&[Role::Admin])?;

    state
        .classroom_service
        .create_classroom(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref classroom| ApiSuccess::new(StatusCode::CREATED, classroom.into()))
}

/// HTTP request body for creating a classroom (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateClassroomRequest {
    grade: i64,
    section: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateClassroomRequestError {
    #[error("Invalid grade: {0}")]
    Grade(#[from] GradeError),

    #[error("Invalid section: {0}")]
    Section(#[from] SectionError),
}

impl CreateClassroomRequest {
    fn try_into_command(self) -> Result<CreateClassroomCommand, ParseCreateClassroomRequestError> {
        let grade = Grade::new(self.grade)?;
        let section = Section::new(self.section)?;
        Ok(CreateClassroomCommand::new(grade, section))
    }
}

impl From<ParseCreateClassroomRequestError> for ApiError {
    fn from(err: ParseCreateClassroomRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
