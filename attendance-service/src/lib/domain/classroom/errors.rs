use thiserror::Error;

/// Error for ClassroomId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassroomIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Grade validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GradeError {
    #[error("Grade must be an integer >= {min}, got {actual}")]
    TooLow { min: i64, actual: i64 },
}

/// Error for Section validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("Section is required")]
    Empty,
}

/// Top-level error for all classroom-related operations
#[derive(Debug, Clone, Error)]
pub enum ClassroomError {
    #[error("Invalid classroom ID: {0}")]
    InvalidClassroomId(#[from] ClassroomIdError),

    #[error("Invalid grade: {0}")]
    InvalidGrade(#[from] GradeError),

    #[error("Invalid section: {0}")]
    InvalidSection(#[from] SectionError),

    #[error("Classroom not found: {0}")]
    NotFound(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
