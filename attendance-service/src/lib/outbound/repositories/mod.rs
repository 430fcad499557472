pub mod classroom;
pub mod student;
pub mod user;

pub use classroom::InMemoryClassroomRepository;
pub use student::InMemoryStudentRepository;
pub use user::InMemoryUserRepository;
