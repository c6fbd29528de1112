//! Blocking event reader
//!
//! Pulls fixed-size chunks from any [`Read`] source (a captured response
//! body, a pipe, a socket in blocking mode) and yields events as they
//! complete.

use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use crate::config::FramerConfig;
use crate::error::{Result, SseError};
use crate::event::SseEvent;
use crate::session::BoundedParser;

/// Iterator of events decoded from a byte reader
///
/// Ends after EOF, or after yielding the first error.
#[derive(Debug)]
pub struct EventReader<R> {
    reader: R,
    parser: BoundedParser,
    chunk: Vec<u8>,
    ready: VecDeque<SseEvent>,
    failed: Option<SseError>,
    done: bool,
}

impl<R: Read> EventReader<R> {
    /// Create a reader with the default configuration
    pub fn new(reader: R) -> Self {
        Self::from_parts(reader, BoundedParser::default())
    }

    /// Create a reader with a custom configuration
    pub fn with_config(reader: R, config: FramerConfig) -> Result<Self> {
        Ok(Self::from_parts(reader, BoundedParser::new(config)?))
    }

    fn from_parts(reader: R, parser: BoundedParser) -> Self {
        let chunk = vec![0u8; parser.config().read_chunk_size];
        Self {
            reader,
            parser,
            chunk,
            ready: VecDeque::new(),
            failed: None,
            done: false,
        }
    }

    /// Consume the reader, returning the underlying source
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) {
        let n = match self.reader.read(&mut self.chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => return,
            Err(e) => {
                self.fail(e.into());
                return;
            }
        };

        if n == 0 {
            self.done = true;
            match self.parser.finish() {
                Ok(last) => self.ready.extend(last),
                Err(e) => self.failed = Some(e),
            }
            return;
        }

        match self.parser.feed(&self.chunk[..n]) {
            Ok(events) => self.ready.extend(events),
            Err(e) => return self.fail(e),
        }
        if let Err(e) = self.parser.check() {
            self.fail(e);
        }
    }

    fn fail(&mut self, err: SseError) {
        self.failed = Some(err);
        self.done = true;
    }
}

impl<R: Read> Iterator for EventReader<R> {
    type Item = Result<SseEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Events completed before a failure are delivered first.
            if let Some(event) = self.ready.pop_front() {
                return Some(Ok(event));
            }
            if let Some(err) = self.failed.take() {
                return Some(Err(err));
            }
            if self.done {
                return None;
            }
            self.fill();
        }
    }
}
