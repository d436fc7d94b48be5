//! Error types for releve.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleveError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Lexicon errors
    #[error("Invalid lexicon pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },

    // Recognition feed and session errors
    #[error("Dictation session failed: {reason}")]
    SessionFailed { reason: String },

    #[error("Malformed feed event on line {line}: {message}")]
    FeedEvent { line: usize, message: String },

    // Inventory and export errors
    #[error("No inventory row at index {index} (inventory has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ReleveError>;
