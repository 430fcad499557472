use serde::Serialize;

use crate::domain::student::models::Student;
use crate::domain::user::models::Role;

pub mod create_student;
pub mod delete_student;
pub mod list_students;
pub mod update_student;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub classroom_id: String,
}

impl From<&Student> for StudentData {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.to_string(),
            first_name: student.first_name.as_str().to_string(),
            last_name: student.last_name.as_str().to_string(),
            email: student.email.as_str().to_string(),
            classroom_id: student.classroom_id.to_string(),
        }
    }
}

/// Roles allowed to modify the student roster.
pub(crate) const STUDENT_WRITERS: [Role; 2] = [Role::Admin, Role::Administrativo];
