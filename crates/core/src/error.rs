use std::io;

/// Errors that can occur during soma-inspector operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Edit error: {0}")]
    EditError(String),

    #[error("No parameter '{name}' found in class '{class_name}'")]
    UnknownParameter { class_name: String, name: String },

    #[error("No update method found for class '{0}'")]
    UpdateMethodNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for soma-inspector operations
pub type Result<T> = std::result::Result<T, Error>;
