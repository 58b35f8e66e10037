use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Store-related errors.
///
/// Permission failures get their own variant because callers must not
/// retry them blindly: a permission-denied settle leaves a wager stuck
/// PENDING and silently corrupts the public track record.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("malformed stored wager '{id}': {reason}")]
    Corrupt { id: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// True when the error indicates an authorization fault rather than a
    /// transient one. Retrying these without surfacing them is unsafe.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Error::Store(StoreError::PermissionDenied(_)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
