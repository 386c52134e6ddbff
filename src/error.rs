//! Error types for the SpellTrie library.
//!
//! All errors are represented by the [`SpellTrieError`] enum. The engine itself
//! only ever produces [`SpellTrieError::NotFound`] and
//! [`SpellTrieError::MalformedSource`]; the remaining variants belong to the
//! service, configuration and CLI layers.
//!
//! # Examples
//!
//! ```
//! use spelltrie::error::{Result, SpellTrieError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellTrieError::not_found("flare"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for SpellTrie operations.
#[derive(Error, Debug)]
pub enum SpellTrieError {
    /// The path does not terminate at a stored word.
    #[error("The word '{0}' does not exist in the trie.")]
    NotFound(String),

    /// A vocabulary source line could not be parsed.
    #[error("Malformed source at line {line}: {message}")]
    MalformedSource { line: usize, message: String },

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session-related errors
    #[error("Session error: {0}")]
    Session(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpellTrieError.
pub type Result<T> = std::result::Result<T, SpellTrieError>;

impl SpellTrieError {
    /// Create a new not found error for `word`.
    pub fn not_found<S: Into<String>>(word: S) -> Self {
        SpellTrieError::NotFound(word.into())
    }

    /// Create a new malformed source error at the 1-based `line`.
    pub fn malformed<S: Into<String>>(line: usize, message: S) -> Self {
        SpellTrieError::MalformedSource {
            line,
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellTrieError::Config(msg.into())
    }

    /// Create a new session error.
    pub fn session<S: Into<String>>(msg: S) -> Self {
        SpellTrieError::Session(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellTrieError::Other(msg.into())
    }

    /// Whether this error is a search miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpellTrieError::NotFound(_))
    }
}
