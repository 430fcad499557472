pub mod classroom;
pub mod student;
pub mod user;
