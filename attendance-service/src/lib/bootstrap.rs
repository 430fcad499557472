//! Startup seeding of the in-memory collections.

use crate::config::AdminConfig;
use crate::domain::classroom::models::CreateClassroomCommand;
use crate::domain::classroom::models::Grade;
use crate::domain::classroom::models::Section;
use crate::domain::classroom::ports::ClassroomServicePort;
use crate::domain::student::models::CreateStudentCommand;
use crate::domain::student::models::PersonName;
use crate::domain::student::ports::StudentServicePort;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;

/// Provision the initial administrator from configuration.
pub async fn seed_admin<US: UserServicePort>(
    user_service: &US,
    admin: &AdminConfig,
) -> Result<User, anyhow::Error> {
    let command = CreateUserCommand::new(
        EmailAddress::new(admin.email.clone())?,
        Role::Admin,
        admin.display_name.clone(),
        admin.password.clone(),
    );

    Ok(user_service.create_user(command).await?)
}

/// Load the starter classrooms (1A, 2B) and one student in 1A.
pub async fn seed_school<CS, SS>(
    classroom_service: &CS,
    student_service: &SS,
) -> Result<(), anyhow::Error>
where
    CS: ClassroomServicePort,
    SS: StudentServicePort,
{
    let first = classroom_service
        .create_classroom(CreateClassroomCommand::new(
            Grade::new(1)?,
            Section::new("A".to_string())?,
        ))
        .await?;

    classroom_service
        .create_classroom(CreateClassroomCommand::new(
            Grade::new(2)?,
            Section::new("B".to_string())?,
        ))
        .await?;

    student_service
        .create_student(CreateStudentCommand {
            first_name: PersonName::new("firstName", "Ana".to_string())?,
            last_name: PersonName::new("lastName", "García".to_string())?,
            email: EmailAddress::new("ana@example.com".to_string())?,
            classroom_id: first.id,
        })
        .await?;

    tracing::info!(classrooms = 2, students = 1, "School data seeded");

    Ok(())
}
