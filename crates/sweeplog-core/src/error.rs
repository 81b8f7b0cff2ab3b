use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Log format error")]
    Csv(#[from] csv::Error),

    #[error("Invalid date: {0}")]
    ParseDate(#[from] chrono::ParseError),

    #[error("Schedule file not found: {}", .0.display())]
    ScheduleNotFound(PathBuf),

    #[error("User file not found: {}", .0.display())]
    UsersNotFound(PathBuf),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
