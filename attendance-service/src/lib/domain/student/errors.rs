use thiserror::Error;

use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::errors::ClassroomIdError;
use crate::domain::user::errors::EmailError;

/// Error for StudentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StudentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PersonName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("{0} is required")]
    Empty(&'static str),
}

/// Top-level error for all student-related operations
#[derive(Debug, Clone, Error)]
pub enum StudentError {
    #[error("Invalid student ID: {0}")]
    InvalidStudentId(#[from] StudentIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid classroom ID: {0}")]
    InvalidClassroomId(#[from] ClassroomIdError),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Classroom does not exist: {0}")]
    ClassroomNotFound(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<ClassroomError> for StudentError {
    fn from(err: ClassroomError) -> Self {
        match err {
            ClassroomError::NotFound(id) => StudentError::ClassroomNotFound(id),
            ClassroomError::InvalidClassroomId(e) => StudentError::InvalidClassroomId(e),
            other => StudentError::Unknown(other.to_string()),
        }
    }
}
