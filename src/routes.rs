pub mod health;
pub mod student;
