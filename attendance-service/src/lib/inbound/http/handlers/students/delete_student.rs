use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::StudentData;
use super::STUDENT_WRITERS;
use crate::domain::student::models::StudentId;
use crate::domain::student::ports::StudentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_student(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(student_id): Path<String>,
) -> Result<ApiSuccess<StudentData>, ApiError> {
    user.require_role(&STUDENT_WRITERS)?;

    let id = StudentId::from_string(&student_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid student ID: {}", e)))?;

    state
        .student_service
        .delete_student(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref student| ApiSuccess::new(StatusCode::OK, student.into()))
}
