//! Framer configuration
//!
//! The framer core has no limits of its own. These settings belong to the
//! integration layer ([`BoundedParser`](crate::BoundedParser) and the reader /
//! stream adapters built on it).

use crate::error::{Result, SseError};

/// Default cap on the pending (unterminated) tail: 1 MiB
pub const DEFAULT_MAX_BUFFER_BYTES: usize = 1_048_576;

/// Default read size for [`EventReader`](crate::EventReader)
pub const DEFAULT_READ_CHUNK_SIZE: usize = 8 * 1024;

/// Caller-side policy around an [`SseParser`](crate::SseParser)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramerConfig {
    /// Maximum bytes the parser may hold without seeing a separator.
    /// `None` disables the check.
    pub max_buffer_bytes: Option<usize>,
    /// Decode an unterminated tail as a final event when the source closes,
    /// instead of discarding it
    pub flush_on_close: bool,
    /// Bytes requested per read by blocking readers
    pub read_chunk_size: usize,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            max_buffer_bytes: Some(DEFAULT_MAX_BUFFER_BYTES),
            flush_on_close: false,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl FramerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_buffer_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_buffer_bytes = limit;
        self
    }

    pub fn with_flush_on_close(mut self, flush: bool) -> Self {
        self.flush_on_close = flush;
        self
    }

    pub fn with_read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_buffer_bytes == Some(0) {
            return Err(SseError::Config(
                "max_buffer_bytes must be > 0 (use None for no limit)".to_string(),
            ));
        }
        if self.read_chunk_size == 0 {
            return Err(SseError::Config("read_chunk_size must be > 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = FramerConfig::default();
        assert_eq!(config.max_buffer_bytes, Some(DEFAULT_MAX_BUFFER_BYTES));
        assert!(!config.flush_on_close);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = FramerConfig::new().with_max_buffer_bytes(Some(0));
        assert!(matches!(config.validate(), Err(SseError::Config(_))));

        let config = FramerConfig::new().with_max_buffer_bytes(None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = FramerConfig::new().with_read_chunk_size(0);
        assert!(config.validate().is_err());
    }
}
