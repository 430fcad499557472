use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::classroom::errors::ClassroomError;
use crate::student::errors::StudentError;
use crate::user::errors::UserError;

pub mod authenticate;
pub mod classrooms;
pub mod students;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidEmail(_) | UserError::InvalidRole(_) | UserError::InvalidUserId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(_) | UserError::Token(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<StudentError> for ApiError {
    fn from(err: StudentError) -> Self {
        match err {
            StudentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StudentError::InvalidStudentId(_) => ApiError::BadRequest(err.to_string()),
            StudentError::InvalidName(_)
            | StudentError::InvalidEmail(_)
            | StudentError::InvalidClassroomId(_)
            | StudentError::ClassroomNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            StudentError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ClassroomError> for ApiError {
    fn from(err: ClassroomError) -> Self {
        match err {
            ClassroomError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ClassroomError::InvalidClassroomId(_) => ApiError::BadRequest(err.to_string()),
            ClassroomError::InvalidGrade(_) | ClassroomError::InvalidSection(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ClassroomError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::errors::NameError;

    #[test]
    fn test_user_error_mapping() {
        assert_eq!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
        assert!(matches!(
            ApiError::from(UserError::EmailAlreadyExists("a@b.com".to_string())),
            ApiError::Conflict(_)
        ));
    }

    #[test]
    fn test_student_error_mapping() {
        assert!(matches!(
            ApiError::from(StudentError::ClassroomNotFound("x".to_string())),
            ApiError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            ApiError::from(StudentError::InvalidName(NameError::Empty("firstName"))),
            ApiError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            ApiError::from(StudentError::NotFound("x".to_string())),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_forbidden_status() {
        let response = ApiError::Forbidden("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
