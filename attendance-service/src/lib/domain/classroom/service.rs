use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::models::Classroom;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::models::CreateClassroomCommand;
use crate::domain::classroom::ports::ClassroomRepository;
use crate::domain::classroom::ports::ClassroomServicePort;

/// Domain service implementation for classroom operations.
pub struct ClassroomService<CR>
where
    CR: ClassroomRepository,
{
    repository: Arc<CR>,
}

impl<CR> ClassroomService<CR>
where
    CR: ClassroomRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ClassroomServicePort for ClassroomService<CR>
where
    CR: ClassroomRepository,
{
    async fn create_classroom(
        &self,
        command: CreateClassroomCommand,
    ) -> Result<Classroom, ClassroomError> {
        let classroom = Classroom {
            id: ClassroomId::new(),
            grade: command.grade,
            section: command.section,
        };

        let created = self.repository.create(classroom).await?;
        tracing::info!(
            classroom_id = %created.id,
            grade = created.grade.value(),
            section = created.section.as_str(),
            "Classroom created"
        );

        Ok(created)
    }

    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ClassroomError> {
        self.repository.list_all().await
    }

    async fn get_classroom(&self, id: &ClassroomId) -> Result<Classroom, ClassroomError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ClassroomError::NotFound(id.to_string()))
    }
}
