use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReaderSyncError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session rejected with status {status}, the cookies have likely expired")]
    Auth { status: u16 },
    #[error("Could not parse response: {0}")]
    Parse(String),
    #[error("Malformed form payload: {0}")]
    Format(String),
    #[error("Unexpected response shape: {0}")]
    Schema(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ReaderSyncError {
    fn from(value: reqwest::Error) -> Self {
        ReaderSyncError::Network(value.to_string())
    }
}

impl From<serde_json::Error> for ReaderSyncError {
    fn from(value: serde_json::Error) -> Self {
        ReaderSyncError::Parse(value.to_string())
    }
}

impl From<config::ConfigError> for ReaderSyncError {
    fn from(value: config::ConfigError) -> Self {
        ReaderSyncError::Config(value.to_string())
    }
}

pub fn status_error(status: u16, body: &str) -> Option<ReaderSyncError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(ReaderSyncError::Auth { status }),
        _ => Some(ReaderSyncError::Network(format!(
            "HTTP status {} with body: {}",
            status, body
        ))),
    }
}
