//! Accumulation buffer
//!
//! Owns the bytes not yet confirmed to belong to a complete record. Grows with
//! every [`append`](AccumulationBuffer::append) and is cut back to the
//! unconsumed tail by [`replace_with_tail`](AccumulationBuffer::replace_with_tail).
//!
//! No upper bound is enforced here; see [`crate::session::BoundedParser`].

use bytes::{Bytes, BytesMut};

/// Growable byte buffer holding the unconsumed suffix of a stream
#[derive(Debug, Default)]
pub struct AccumulationBuffer {
    bytes: BytesMut,
}

impl AccumulationBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            bytes: BytesMut::new(),
        }
    }

    /// Append a chunk to the end of the buffer
    pub fn append(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    /// Current buffered bytes
    pub fn contents(&self) -> &[u8] {
        &self.bytes
    }

    /// Replace the buffer with the tail starting at `end`, returning the
    /// consumed prefix `[0, end)`.
    ///
    /// The prefix is split off without copying the tail.
    ///
    /// # Panics
    ///
    /// Panics if `end > self.len()`.
    pub fn replace_with_tail(&mut self, end: usize) -> Bytes {
        self.bytes.split_to(end).freeze()
    }

    /// Drop everything buffered
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Take every buffered byte, leaving the buffer empty
    pub fn take(&mut self) -> Bytes {
        self.bytes.split().freeze()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
