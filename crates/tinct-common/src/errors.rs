use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color format: {0}")]
    InvalidFormat(String),

    #[error("color value out of range: {0}")]
    InvalidRange(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The persisted record is not a JSON array of strings.
    #[error("storage decode error: {0}")]
    Decode(String),

    #[error("storage encode error: {0}")]
    Encode(String),

    #[error("storage write error: {0}")]
    Write(String),

    #[error("storage path error: {0}")]
    Path(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TinctError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
