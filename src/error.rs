//! Error types for utter

use std::io;
use thiserror::Error;

/// Main error type for utter
#[derive(Error, Debug)]
pub enum UtterError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Audio playback error: {0}")]
    Audio(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid engine '{0}' (valid choices: gtts, native)")]
    InvalidEngine(String),

    #[error("No text to speak (input is empty)")]
    EmptyText,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for utter operations
pub type Result<T> = std::result::Result<T, UtterError>;

impl From<String> for UtterError {
    fn from(s: String) -> Self {
        UtterError::Other(s)
    }
}

impl From<&str> for UtterError {
    fn from(s: &str) -> Self {
        UtterError::Other(s.to_string())
    }
}
