
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhirlwindError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("{0}")]
    Demo(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("Task error: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, WhirlwindError>;

// Helper conversions
impl From<reqwest::Error> for WhirlwindError {
    fn from(e: reqwest::Error) -> Self { Self::Transport(e.to_string()) }
}
impl From<tokio::task::JoinError> for WhirlwindError {
    fn from(e: tokio::task::JoinError) -> Self { Self::Task(e.to_string()) }
}
impl From<config::ConfigError> for WhirlwindError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
