use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::classroom::errors::ClassroomError;
use crate::domain::classroom::models::Classroom;
use crate::domain::classroom::models::ClassroomId;
use crate::domain::classroom::ports::ClassroomRepository;

/// Process-lifetime classroom store, listed in creation order.
#[derive(Debug, Default)]
pub struct InMemoryClassroomRepository {
    classrooms: RwLock<Vec<Classroom>>,
}

impl InMemoryClassroomRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClassroomRepository for InMemoryClassroomRepository {
    async fn create(&self, classroom: Classroom) -> Result<Classroom, ClassroomError> {
        self.classrooms.write().await.push(classroom.clone());
        Ok(classroom)
    }

    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, ClassroomError> {
        let classrooms = self.classrooms.read().await;
        Ok(classrooms.iter().find(|classroom| classroom.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Classroom>, ClassroomError> {
        Ok(self.classrooms.read().await.clone())
    }
}
