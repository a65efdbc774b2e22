//! Shared error type across policyfeed crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Policy data file does not exist.
    FileNotFound,
    /// Policy data file exists but could not be read.
    IoError,
    /// Malformed CSV.
    ParseError,
    /// Required column missing from the header row.
    SchemaError,
    /// Requested policy id does not exist.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::FileNotFound => "FILE_NOT_FOUND",
            ClientCode::IoError => "IO_ERROR",
            ClientCode::ParseError => "PARSE_ERROR",
            ClientCode::SchemaError => "SCHEMA_ERROR",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyFeedError>;

/// Unified error type used by core and gateway.
///
/// `Display` carries the full detail (paths, parser positions) and is meant
/// for logs. Clients only ever see [`PolicyFeedError::client_message`].
#[derive(Debug, Error)]
pub enum PolicyFeedError {
    #[error("policy data file not found: {path}")]
    FileNotFound { path: String },
    #[error("policy data file unreadable ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed policy csv: {0}")]
    Parse(String),
    #[error("policy csv is missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("policy not found: {0}")]
    NotFound(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PolicyFeedError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PolicyFeedError::FileNotFound { .. } => ClientCode::FileNotFound,
            PolicyFeedError::Io { .. } => ClientCode::IoError,
            PolicyFeedError::Parse(_) => ClientCode::ParseError,
            PolicyFeedError::Schema { .. } => ClientCode::SchemaError,
            PolicyFeedError::NotFound(_) => ClientCode::NotFound,
            // Startup only; never reaches a response.
            PolicyFeedError::Config(_) | PolicyFeedError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Sanitized message safe to return to callers (no paths, no parser internals).
    pub fn client_message(&self) -> String {
        match self {
            PolicyFeedError::FileNotFound { .. } => "policy data file not found".into(),
            PolicyFeedError::Io { .. } => "policy data file could not be read".into(),
            PolicyFeedError::Parse(_) => "policy data is malformed".into(),
            PolicyFeedError::Schema { missing } => {
                format!("policy data is missing required columns: {}", missing.join(", "))
            }
            PolicyFeedError::NotFound(_) => "policy not found".into(),
            PolicyFeedError::Config(_) | PolicyFeedError::Internal(_) => "internal error".into(),
        }
    }

    /// Classify an I/O failure on the data file.
    pub fn from_io(path: &std::path::Path, e: std::io::Error) -> Self {
        let path = path.display().to_string();
        if e.kind() == std::io::ErrorKind::NotFound {
            PolicyFeedError::FileNotFound { path }
        } else {
            PolicyFeedError::Io { path, source: e }
        }
    }

    /// Classify a CSV reader failure on the data file at `path`.
    ///
    /// Read failures keep their I/O classification; everything else
    /// (bad UTF-8, field count, deserialize) is a parse error.
    pub fn from_csv(path: &std::path::Path, e: csv::Error) -> Self {
        if !e.is_io_error() {
            return PolicyFeedError::Parse(e.to_string());
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Self::from_io(path, io),
            other => PolicyFeedError::Parse(format!("{other:?}")),
        }
    }
}
