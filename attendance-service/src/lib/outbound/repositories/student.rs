use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::student::errors::StudentError;
use crate::domain::student::models::Student;
use crate::domain::student::models::StudentId;
use crate::domain::student::ports::StudentRepository;

/// Process-lifetime student store, listed in enrollment order.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, student: Student) -> Result<Student, StudentError> {
        self.students.write().await.push(student.clone());
        Ok(student)
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentError> {
        let students = self.students.read().await;
        Ok(students.iter().find(|student| student.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Student>, StudentError> {
        Ok(self.students.read().await.clone())
    }

    async fn update(&self, student: Student) -> Result<Student, StudentError> {
        let mut students = self.students.write().await;
        let slot = students
            .iter_mut()
            .find(|existing| existing.id == student.id)
            .ok_or(StudentError::NotFound(student.id.to_string()))?;

        *slot = student.clone();
        Ok(student)
    }

    async fn delete(&self, id: &StudentId) -> Result<Student, StudentError> {
        let mut students = self.students.write().await;
        let index = students
            .iter()
            .position(|student| student.id == *id)
            .ok_or(StudentError::NotFound(id.to_string()))?;

        Ok(students.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classroom::models::ClassroomId;
    use crate::domain::student::models::PersonName;
    use crate::domain::user::models::EmailAddress;

    fn student(first_name: &str) -> Student {
        Student {
            id: StudentId::new(),
            first_name: PersonName::new("firstName", first_name.to_string()).unwrap(),
            last_name: PersonName::new("lastName", "García".to_string()).unwrap(),
            email: EmailAddress::new("ana@example.com".to_string()).unwrap(),
            classroom_id: ClassroomId::new(),
        }
    }

    #[tokio::test]
    async fn test_list_preserves_order() {
        let repository = InMemoryStudentRepository::new();
        repository.create(student("Ana")).await.unwrap();
        repository.create(student("Luis")).await.unwrap();

        let names: Vec<String> = repository
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|s| s.first_name.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Ana", "Luis"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repository = InMemoryStudentRepository::new();
        let mut created = repository.create(student("Ana")).await.unwrap();

        created.first_name = PersonName::new("firstName", "Lucía".to_string()).unwrap();
        repository.update(created.clone()).await.unwrap();

        let found = repository.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.first_name.as_str(), "Lucía");

        let removed = repository.delete(&created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert!(repository.list_all().await.unwrap().is_empty());

        assert!(matches!(
            repository.delete(&created.id).await,
            Err(StudentError::NotFound(_))
        ));
        assert!(matches!(
            repository.update(created).await,
            Err(StudentError::NotFound(_))
        ));
    }
}
