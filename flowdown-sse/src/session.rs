//! Bounded parser
//!
//! Wraps [`SseParser`] with the policies the framer leaves to its caller:
//! a cap on the unterminated tail and what to do with that tail when the
//! source closes.

use crate::config::FramerConfig;
use crate::error::{Result, SseError};
use crate::event::SseEvent;
use crate::parser::SseParser;

/// [`SseParser`] plus buffer limit and close policy
#[derive(Debug)]
pub struct BoundedParser {
    parser: SseParser,
    config: FramerConfig,
    /// Pending size that tripped the limit; once set, the parser is dead
    overflowed_at: Option<usize>,
}

impl Default for BoundedParser {
    fn default() -> Self {
        Self {
            parser: SseParser::new(),
            config: FramerConfig::default(),
            overflowed_at: None,
        }
    }
}

impl BoundedParser {
    /// Create a parser after validating `config`
    pub fn new(config: FramerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            parser: SseParser::new(),
            config,
            overflowed_at: None,
        })
    }

    /// Feed a chunk.
    ///
    /// Events completed by the chunk are always returned. If the chunk leaves
    /// the pending tail above the limit, the tail is discarded and
    /// [`check`](Self::check), every later `feed` and [`finish`](Self::finish)
    /// report [`SseError::BufferOverflow`]; the caller should abort the source.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<SseEvent>> {
        self.check()?;

        let events = self.parser.parse(chunk);

        if let Some(limit) = self.config.max_buffer_bytes {
            let pending = self.parser.pending_len();
            if pending > limit {
                tracing::warn!(
                    pending,
                    limit,
                    "SSE record exceeded buffer limit, discarding partial data"
                );
                self.parser.reset();
                self.overflowed_at = Some(pending);
            }
        }

        Ok(events)
    }

    /// Fail if the buffer limit has been exceeded
    pub fn check(&self) -> Result<()> {
        match (self.overflowed_at, self.config.max_buffer_bytes) {
            (Some(buffered), Some(limit)) => Err(SseError::BufferOverflow { buffered, limit }),
            _ => Ok(()),
        }
    }

    /// Handle source close.
    ///
    /// With `flush_on_close` the pending tail is decoded as a final record;
    /// otherwise it is discarded. The parser is left empty and reusable
    /// unless it overflowed.
    pub fn finish(&mut self) -> Result<Option<SseEvent>> {
        self.check()?;

        if self.config.flush_on_close {
            return Ok(self.parser.flush());
        }

        let pending = self.parser.pending_len();
        if pending > 0 {
            tracing::debug!(pending, "Discarding unterminated SSE record at close");
        }
        self.parser.reset();
        Ok(None)
    }

    pub fn pending_len(&self) -> usize {
        self.parser.pending_len()
    }

    pub fn config(&self) -> &FramerConfig {
        &self.config
    }
}
