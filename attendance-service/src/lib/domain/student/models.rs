use std::fmt;

use uuid::Uuid;

use crate::domain::classroom::models::ClassroomId;
use crate::domain::student::errors::NameError;
use crate::domain::student::errors::StudentIdError;
use crate::domain::user::models::EmailAddress;

/// Student entity, enrolled in exactly one classroom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub classroom_id: ClassroomId,
}

/// Student unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StudentId(pub Uuid);

impl StudentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a student ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, StudentIdError> {
        Uuid::parse_str(s)
            .map(StudentId)
            .map_err(|e| StudentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name. Trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// # Arguments
    /// * `field` - Field name reported on failure (e.g. "firstName")
    /// * `name` - Raw input
    ///
    /// # Errors
    /// * `Empty` - Blank name
    pub fn new(field: &'static str, name: String) -> Result<Self, NameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NameError::Empty(field));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to enroll a student with validated fields
#[derive(Debug)]
pub struct CreateStudentCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub classroom_id: ClassroomId,
}

/// Command to update an existing student with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateStudentCommand {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub email: Option<EmailAddress>,
    pub classroom_id: Option<ClassroomId>,
}
