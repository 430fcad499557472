use async_trait::async_trait;

use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::models::Classroom;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::models::CreateClassroomCommand;

/// Port for classroom domain service operations.
#[async_trait]
pub trait ClassroomServicePort: Send + Sync + 'static {
    /// Create a classroom.
    async fn create_classroom(
        &self,
        command: CreateClassroomCommand,
    ) -> Result<Classroom, ClassroomError>;

    /// List classrooms in creation order.
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ClassroomError>;

    /// Retrieve classroom by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Classroom does not exist
    async fn get_classroom(&self, id: &ClassroomId) -> Result<Classroom, ClassroomError>;
}

/// Persistence operations for classrooms.
#[async_trait]
pub trait ClassroomRepository: Send + Sync + 'static {
    async fn create(&self, classroom: Classroom) -> Result<Classroom, ClassroomError>;

    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, ClassroomError>;

    async fn list_all(&self) -> Result<Vec<Classroom>, ClassroomError>;
}
