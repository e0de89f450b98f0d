//! Domain-specific error types and error handling utilities.
//!
//! This module defines the error taxonomy of the load/run pipeline. Each remote
//! operation has its own error type so callers can match on exactly the failures
//! that operation can produce, and [`CodeboxError`] wraps them all for the CLI.
//!
//! # Public API
//! - [`FetchError`]: Repository listing unreachable or malformed
//! - [`LoadError`]: Selected file content could not be fetched
//! - [`RunError`]: Local validation or remote execution failures
//! - [`TransportError`]: Connection-level failure below any HTTP status
//! - [`CodeboxError`]: Crate-level error covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, CodeboxError>`
//!
//! # Error Categories
//! - **Local validation**: Empty input, unsupported language, bad index or target
//! - **Remote errors**: Non-success HTTP status, malformed payloads
//! - **Transport errors**: No connectivity, timeouts, TLS failures
//! - **Configuration errors**: Unreadable or invalid config file, bad overrides

use std::path::PathBuf;
use thiserror::Error;

/// Connection-level failure reported by an [`HttpClient`](crate::core::http::HttpClient)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The repository tree listing could not be fetched or understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch repository listing{}: {message}", status_suffix(.status))]
pub struct FetchError {
    /// HTTP status when the server answered, `None` for transport or payload errors
    pub status: Option<u16>,
    pub message: String,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl FetchError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        Self {
            status: None,
            message: err.message,
        }
    }
}

/// Failure to load the content of a selected file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Content of '{path}' is unavailable (HTTP {status})")]
    ContentUnavailable { path: String, status: u16 },

    #[error("Could not download '{path}': {source}")]
    Network {
        path: String,
        source: TransportError,
    },

    #[error("Cannot build a download URL for '{path}': {message}")]
    InvalidUrl { path: String, message: String },
}

impl LoadError {
    pub fn content_unavailable(path: impl Into<String>, status: u16) -> Self {
        Self::ContentUnavailable {
            path: path.into(),
            status,
        }
    }

    pub fn network(path: impl Into<String>, source: TransportError) -> Self {
        Self::Network {
            path: path.into(),
            source,
        }
    }
}

/// Failure to execute the current content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error("Nothing to run: the editor is empty")]
    EmptyInput,

    #[error("Unsupported file type: '{filename}'")]
    UnsupportedLanguage { filename: String },

    #[error("Execution service rejected the request (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    #[error("Execution service unreachable: {0}")]
    Network(#[from] TransportError),

    #[error("Unexpected response from execution service: {0}")]
    MalformedResponse(String),
}

impl RunError {
    pub fn unsupported_language(filename: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            filename: filename.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }
}

/// Why the session refused to start a run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunRejected {
    #[error("Select a file first!")]
    NoSelection,

    #[error("'{path}' is still loading")]
    StillLoading { path: String },

    #[error("A run is already in progress")]
    AlreadyRunning,

    #[error(transparent)]
    Invalid(#[from] RunError),
}

/// Crate-level error type
#[derive(Error, Debug)]
pub enum CodeboxError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    RunRejected(#[from] RunRejected),

    #[error("'{filename}' finished with errors")]
    ProgramFailed { filename: String },

    /// Already shown to the user through the notification sink
    #[error("operation failed")]
    Reported,

    // Target selection errors
    #[error("No files available in the repository listing")]
    NoFilesAvailable,

    #[error("Index must be positive (got 0)")]
    ZeroIndex,

    #[error("Index {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("'{path}' is not a runnable file in the repository listing")]
    FileNotInIndex { path: String },

    // Interactive session errors
    #[error("'{path}' is still loading; wait for it before editing")]
    EditWhileLoading { path: String },

    #[error("Unknown command '{command}'. Type 'help' for the list of commands")]
    UnknownCommand { command: String },

    #[error("'{command}' needs an argument")]
    MissingArgument { command: String },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid repository '{value}'. Use the form OWNER/NAME")]
    InvalidRepository { value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using CodeboxError
pub type Result<T> = std::result::Result<T, CodeboxError>;

impl CodeboxError {
    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create a file not in index error
    pub fn file_not_in_index(path: impl Into<String>) -> Self {
        Self::FileNotInIndex { path: path.into() }
    }

    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    pub fn missing_argument(command: impl Into<String>) -> Self {
        Self::MissingArgument {
            command: command.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a program failed error
    pub fn program_failed(filename: impl Into<String>) -> Self {
        Self::ProgramFailed {
            filename: filename.into(),
        }
    }

    /// Create an invalid repository error
    pub fn invalid_repository(value: impl Into<String>) -> Self {
        Self::InvalidRepository {
            value: value.into(),
        }
    }
}
