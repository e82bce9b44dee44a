//! Error types for lathe.
//!
//! Shaping itself never fails. These errors belong to the layers around it:
//! configuration, prompt building, generation and batch I/O.

use crate::window::WindowError;

/// Errors that can occur outside the shaping core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The short description was empty or whitespace-only.
    #[error("short description must be a non-empty string")]
    EmptySeed,

    /// The word window is not usable.
    #[error("invalid word window: {0}")]
    InvalidWindow(#[from] WindowError),

    /// A filler catalog needs at least one non-blank sentence.
    #[error("filler catalog must contain at least one non-blank sentence")]
    EmptyCatalog,

    /// The placeholder sentence was empty or whitespace-only.
    #[error("placeholder sentence must not be blank")]
    EmptyPlaceholder,

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// The text generator reported a failure.
    #[error("generation error: {0}")]
    Generation(String),
}

/// Result type for lathe operations.
pub type Result<T> = std::result::Result<T, Error>;
