use axum::extract::State;
use axum::http::StatusCode;

use super::ClassroomData;
use crate::domain::classroom::ports::ClassroomServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_classrooms(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ClassroomData>>, ApiError> {
    state
        .classroom_service
        .list_classrooms()
        .await
        .map_err(ApiError::from)
        .map(|classrooms| {
            ApiSuccess::new(
                StatusCode::OK,
                classrooms.iter().map(ClassroomData::from).collect(),
            )
        })
}
