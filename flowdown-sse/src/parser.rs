//! SSE event stream parser
//!
//! Each call to [`SseParser::parse`] appends a chunk to the buffer, finds the
//! last complete separator, decodes every record before it and keeps the rest
//! as the tail for the next call. Records are separated by `\n\n` or
//! `\r\n\r\n`; chunks may split records, separators or UTF-8 sequences
//! anywhere.
//!
//! One parser serves one stream and must be fed sequentially. Nothing here
//! blocks or times out: a partial record stays buffered until more bytes
//! arrive or the caller drops the parser.

use crate::buffer::AccumulationBuffer;
use crate::event::{decode_record, SseEvent};
use crate::sanitize::sanitize_record;
use crate::scanner::find_last_boundary;
use crate::splitter::split_records;

/// Lifecycle of a parser between and during `parse` calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// Buffer empty
    #[default]
    Idle,
    /// Buffer holds bytes with no confirmed boundary yet
    Accumulating,
    /// Boundary confirmed, records being decoded.
    ///
    /// Only held inside [`SseParser::parse`]; every call returns in `Idle`
    /// or `Accumulating`, so [`SseParser::state`] never reports it.
    Draining,
}

/// Turns byte chunks into events
pub trait EventParser: Send {
    /// Feed a chunk, returning every event it completed, in stream order
    fn parse(&mut self, chunk: &[u8]) -> Vec<SseEvent>;
}

/// Streaming SSE parser that accumulates bytes and yields complete events
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: AccumulationBuffer,
    state: ParserState,
}

impl SseParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self {
            buffer: AccumulationBuffer::new(),
            state: ParserState::Idle,
        }
    }

    /// Feed bytes into the parser and return any complete events
    pub fn parse(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        // The retained tail holds no complete separator, so only bytes near
        // the old end need rescanning.
        let scanned = self.buffer.len();
        self.buffer.append(chunk);

        let Some(boundary) = find_last_boundary(self.buffer.contents(), scanned) else {
            self.settle();
            return Vec::new();
        };

        self.state = ParserState::Draining;
        let confirmed = self.buffer.replace_with_tail(boundary.end);

        let mut records = 0usize;
        let events: Vec<SseEvent> = split_records(&confirmed, boundary.separator)
            .filter_map(|raw| {
                records += 1;
                decode_record(&sanitize_record(raw))
            })
            .collect();

        tracing::trace!(
            separator = ?boundary.separator,
            consumed = boundary.end,
            records,
            events = events.len(),
            pending = self.buffer.len(),
            "Drained SSE records"
        );

        self.settle();
        events
    }

    /// Decode the unterminated tail as if the stream had terminated it.
    ///
    /// For use when the transport closes: whether a trailing partial record
    /// is a real final event or garbage is the caller's call. The buffer is
    /// emptied either way.
    pub fn flush(&mut self) -> Option<SseEvent> {
        if self.buffer.is_empty() {
            return None;
        }
        let tail = self.buffer.take();
        self.state = ParserState::Idle;
        decode_record(&sanitize_record(&tail))
    }

    /// Reset the parser state (e.g., on reconnect)
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = ParserState::Idle;
    }

    /// Bytes received but not yet part of a complete record
    pub fn pending(&self) -> &[u8] {
        self.buffer.contents()
    }

    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    fn settle(&mut self) {
        self.state = if self.buffer.is_empty() {
            ParserState::Idle
        } else {
            ParserState::Accumulating
        };
    }
}

impl EventParser for SseParser {
    fn parse(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        SseParser::parse(self, chunk)
    }
}
