use serde::Serialize;

use crate::domain::classroom::models::Classroom;

pub mod create_classroom;
pub mod list_classrooms;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomData {
    pub id: String,
    pub grade: u32,
    pub section: String,
}

impl From<&Classroom> for ClassroomData {
    fn from(classroom: &Classroom) -> Self {
        Self {
            id: classroom.id.to_string(),
            grade: classroom.grade.value(),
            section: classroom.section.as_str().to_string(),
        }
    }
}
