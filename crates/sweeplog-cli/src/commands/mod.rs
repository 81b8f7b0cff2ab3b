pub mod schedule;
pub mod submit;
pub mod tasks;
pub mod users;
