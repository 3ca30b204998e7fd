use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerminalError {
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),
}
