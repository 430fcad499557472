use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::ports::ClassroomRepository;
use crate::domain::student::errors::StudentError;
use crate::domain::student::models::CreateStudentCommand;
use crate::domain::student::models::Student;
use crate::domain::student::models::StudentId;
use crate::domain::student::models::UpdateStudentCommand;
use crate::domain::student::ports::StudentRepository;
use crate::domain::student::ports::StudentServicePort;

/// Domain service implementation for student operations.
///
/// Checks classroom references against the classroom repository before
/// anything is written.
pub struct StudentService<SR, CR>
where
    SR: StudentRepository,
    CR: ClassroomRepository,
{
    students: Arc<SR>,
    classrooms: Arc<CR>,
}

impl<SR, CR> StudentService<SR, CR>
where
    SR: StudentRepository,
    CR: ClassroomRepository,
{
    pub fn new(students: Arc<SR>, classrooms: Arc<CR>) -> Self {
        Self {
            students,
            classrooms,
        }
    }

    async fn ensure_classroom_exists(&self, id: &ClassroomId) -> Result<(), StudentError> {
        match self.classrooms.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ClassroomError::NotFound(id.to_string()).into()),
        }
    }
}

#[async_trait]
impl<SR, CR> StudentServicePort for StudentService<SR, CR>
where
    SR: StudentRepository,
    CR: ClassroomRepository,
{
    async fn create_student(
        &self,
        command: CreateStudentCommand,
    ) -> Result<Student, StudentError> {
        self.ensure_classroom_exists(&command.classroom_id).await?;

        let student = Student {
            id: StudentId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            classroom_id: command.classroom_id,
        };

        let created = self.students.create(student).await?;
        tracing::info!(
            student_id = %created.id,
            classroom_id = %created.classroom_id,
            "Student enrolled"
        );

        Ok(created)
    }

    async fn list_students(&self) -> Result<Vec<Student>, StudentError> {
        self.students.list_all().await
    }

    async fn update_student(
        &self,
        id: &StudentId,
        command: UpdateStudentCommand,
    ) -> Result<Student, StudentError> {
        let mut student = self
            .students
            .find_by_id(id)
            .await?
            .ok_or(StudentError::NotFound(id.to_string()))?;

        if let Some(classroom_id) = command.classroom_id {
            self.ensure_classroom_exists(&classroom_id).await?;
            student.classroom_id = classroom_id;
        }

        if let Some(first_name) = command.first_name {
            student.first_name = first_name;
        }

        if let Some(last_name) = command.last_name {
            student.last_name = last_name;
        }

        if let Some(email) = command.email {
            student.email = email;
        }

        let updated = self.students.update(student).await?;
        tracing::info!(student_id = %updated.id, "Student updated");

        Ok(updated)
    }

    async fn delete_student(&self, id: &StudentId) -> Result<Student, StudentError> {
        let removed = self.students.delete(id).await?;
        tracing::info!(student_id = %removed.id, "Student removed");
        Ok(removed)
    }
}
