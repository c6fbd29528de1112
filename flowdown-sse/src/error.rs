//! Error types for the integration layer
//!
//! The framer itself never fails: malformed input degrades to dropped lines
//! or records. These errors come from the caller-side policies wrapped around
//! it (buffer limit, reading, upstream transport).

use thiserror::Error;

/// Result type alias using [`SseError`]
pub type Result<T> = std::result::Result<T, SseError>;

/// Errors raised while driving a parser from a byte source
#[derive(Debug, Error)]
pub enum SseError {
    /// The unterminated tail grew past the configured limit
    #[error("SSE buffer overflow: {buffered} pending bytes exceed limit of {limit} bytes")]
    BufferOverflow { buffered: usize, limit: usize },

    /// Reading from the byte source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream chunk stream reported an error
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SseError {
    /// Wrap an upstream transport error
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SseError::Transport(err.into())
    }

    /// Check if this error should end the stream for good
    ///
    /// Overflow and configuration errors will recur on any retry with the
    /// same input and settings. IO and transport errors may be transient; the
    /// caller decides whether to reconnect.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SseError::BufferOverflow { .. } | SseError::Config(_))
    }
}
