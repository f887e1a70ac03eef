use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelxError {
    /// The external tool ran but exited non-zero
    #[error("Command '{command}' failed{}: {stderr}", exit_suffix(.exit_code))]
    ExternalCommand {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The external tool could not be started at all
    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    /// Structured output did not match the expected OBS schema
    #[error("Malformed {kind} record: {reason}")]
    MalformedRecord { kind: &'static str, reason: String },

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("{0}")]
    Other(String),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, RelxError>;
