//! Incremental SSE (Server-Sent Events) framer
//!
//! Turns an arbitrarily fragmented byte stream, such as a streaming model
//! response body, into discrete [`SseEvent`]s. Chunks may split records,
//! separators (`\n\n` or `\r\n\r\n`) or UTF-8 sequences anywhere; every record
//! is emitted exactly once, in order, and only the unterminated tail is kept
//! between calls.
//!
//! The pipeline, leaves first:
//! - [`buffer`]: bytes not yet part of a complete record
//! - [`scanner`]: right-most complete separator
//! - [`splitter`]: confirmed prefix into raw records
//! - [`sanitize`]: trailing terminators and mixed line endings
//! - [`event`]: field grammar into [`SseEvent`]
//! - [`parser`]: the [`SseParser`] facade
//!
//! [`SseParser`] has no limits and no failure modes. [`BoundedParser`],
//! [`EventReader`] and [`event_stream`] add the caller-side policies: a cap on
//! the pending tail and what to do with it when the source closes.
//!
//! ```
//! use flowdown_sse::SseParser;
//!
//! let mut parser = SseParser::new();
//! assert!(parser.parse(b"data: hel").is_empty());
//!
//! let events = parser.parse(b"lo\n\n");
//! assert_eq!(events[0].data, "hello");
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod parser;
pub mod reader;
pub mod sanitize;
pub mod scanner;
pub mod session;
pub mod splitter;
pub mod stream;

pub use config::{FramerConfig, DEFAULT_MAX_BUFFER_BYTES, DEFAULT_READ_CHUNK_SIZE};
pub use error::{Result, SseError};
pub use event::SseEvent;
pub use parser::{EventParser, ParserState, SseParser};
pub use reader::EventReader;
pub use scanner::Separator;
pub use session::BoundedParser;
pub use stream::{event_stream, EventStream};
