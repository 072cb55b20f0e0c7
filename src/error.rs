use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweeperError {
    #[error("Credentials file not found at: {0}. Set GCP_CREDENTIALS_PATH or place the key file in the default location.")]
    CredentialsNotFound(String),

    #[error("Invalid credentials file: {0}")]
    InvalidCredentials(String),

    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    #[error("Failed to disable version '{version}': {reason}")]
    DisableFailed { version: String, reason: String },

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl SweeperError {
    /// Return a typed exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweeperError::CredentialsNotFound(_) => 2,
            SweeperError::InvalidCredentials(_) => 2,
            SweeperError::RemoteCall(_) => 3,
            SweeperError::DisableFailed { .. } => 3,
            SweeperError::Snapshot(_) => 1,
            SweeperError::Serialization(_) => 1,
            SweeperError::Config(_) => 2,
            SweeperError::Io(_) => 1,
            SweeperError::Other(_) => 1,
        }
    }

    /// Return a string error code identifier.
    pub fn error_code(&self) -> &'static str {
        match self {
            SweeperError::CredentialsNotFound(_) => "credentials_not_found",
            SweeperError::InvalidCredentials(_) => "invalid_credentials",
            SweeperError::RemoteCall(_) => "remote_call_failed",
            SweeperError::DisableFailed { .. } => "disable_failed",
            SweeperError::Snapshot(_) => "snapshot_error",
            SweeperError::Serialization(_) => "serialization_error",
            SweeperError::Config(_) => "config_error",
            SweeperError::Io(_) => "io_error",
            SweeperError::Other(_) => "error",
        }
    }
}

/// JSON error response for --json mode.
#[derive(Serialize)]
pub struct JsonError {
    pub error: JsonErrorDetail,
}

#[derive(Serialize)]
pub struct JsonErrorDetail {
    pub code: String,
    pub message: String,
    pub exit_code: i32,
}

impl JsonError {
    pub fn from_error(e: &SweeperError) -> Self {
        Self {
            error: JsonErrorDetail {
                code: e.error_code().to_string(),
                message: e.to_string(),
                exit_code: e.exit_code(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, SweeperError>;
