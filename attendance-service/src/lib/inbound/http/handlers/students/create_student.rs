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
use crate::domain::student::models::CreateStudentCommand;
use crate::domain::student::models::PersonName;
use crate::domain::student::ports::StudentServicePort;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_student(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateStudentRequest>,
) -> Result<ApiSuccess<StudentData>, ApiError> {
    user.require_role(&STUDENT_WRITERS)?;

    state
        .student_service
        .create_student(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref student| ApiSuccess::new(StatusCode::CREATED, student.into()))
}

/// HTTP request body for creating a student (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    first_name: String,
    last_name: String,
    email: String,
    classroom_id: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateStudentRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid classroom ID: {0}")]
    ClassroomId(#[from] ClassroomIdError),
}

impl CreateStudentRequest {
    fn try_into_command(self) -> Result<CreateStudentCommand, ParseCreateStudentRequestError> {
        Ok(CreateStudentCommand {
            first_name: PersonName::new("firstName", self.first_name)?,
            last_name: PersonName::new("lastName", self.last_name)?,
            email: EmailAddress::new(self.email)?,
            classroom_id: ClassroomId::from_string(&self.classroom_id)?,
        })
    }
}

impl From<ParseCreateStudentRequestError> for ApiError {
    fn from(err: ParseCreateStudentRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(classroom_id: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: "Luis".to_string(),
            last_name: "Pérez".to_string(),
            email: "luis@example.com".to_string(),
            classroom_id: classroom_id.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_request() {
        let id = ClassroomId::new();
        let command = request(&id.to_string()).try_into_command().unwrap();

        assert_eq!(command.first_name.as_str(), "Luis");
        assert_eq!(command.classroom_id, id);
    }

    #[test]
    fn test_parse_rejects_bad_classroom_id() {
        assert!(matches!(
            request("not-a-uuid").try_into_command(),
            Err(ParseCreateStudentRequestError::ClassroomId(_))
        ));
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        let mut body = request(&ClassroomId::new().to_string());
        body.first_name = "  ".to_string();

        assert!(matches!(
            body.try_into_command(),
            Err(ParseCreateStudentRequestError::Name(NameError::Empty("firstName")))
        ));
    }
}
