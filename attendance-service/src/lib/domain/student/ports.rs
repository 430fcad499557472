use async_trait::async_trait;

use crate::domain::student::errors::StudentError;
use crate::domain::student::models::CreateStudentCommand;
use crate::domain::student::models::Student;
use crate::domain::student::models::StudentId;
use crate::domain::student::models::UpdateStudentCommand;

/// Port for student domain service operations.
#[async_trait]
pub trait StudentServicePort: Send + Sync + 'static {
    /// Enroll a student.
    ///
    /// # Errors
    /// * `ClassroomNotFound` - Referenced classroom does not exist
    async fn create_student(&self, command: CreateStudentCommand)
        -> Result<Student, StudentError>;

    /// List students in enrollment order.
    async fn list_students(&self) -> Result<Vec<Student>, StudentError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Student does not exist
    /// * `ClassroomNotFound` - New classroom does not exist
    async fn update_student(
        &self,
        id: &StudentId,
        command: UpdateStudentCommand,
    ) -> Result<Student, StudentError>;

    /// Remove a student, returning the removed record.
    ///
    /// # Errors
    /// * `NotFound` - Student does not exist
    async fn delete_student(&self, id: &StudentId) -> Result<Student, StudentError>;
}

/// Persistence operations for students.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    async fn create(&self, student: Student) -> Result<Student, StudentError>;

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentError>;

    async fn list_all(&self) -> Result<Vec<Student>, StudentError>;

    /// # Errors
    /// * `NotFound` - Student does not exist
    async fn update(&self, student: Student) -> Result<Student, StudentError>;

    /// # Errors
    /// * `NotFound` - Student does not exist
    async fn delete(&self, id: &StudentId) -> Result<Student, StudentError>;
}
