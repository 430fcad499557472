use axum::extract::State;
use axum::http::StatusCode;

use super::StudentData;
use crate::domain::student::ports::StudentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<StudentData>>, ApiError> {
    state
        .student_service
        .list_students()
        .await
        .map_err(ApiError::from)
        .map(|students| {
            ApiSuccess::new(
                StatusCode::OK,
                students.iter().map(StudentData::from).collect(),
            )
        })
}
