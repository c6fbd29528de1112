//! Async event stream adapter
//!
//! Frames a stream of byte chunks (e.g. an HTTP response `bytes_stream()`)
//! into a stream of events. Connection setup, authentication and reconnects
//! stay with the caller.

use std::pin::Pin;

use futures::{Stream, StreamExt};

use crate::config::FramerConfig;
use crate::error::{Result, SseError};
use crate::event::SseEvent;
use crate::session::BoundedParser;

/// Boxed stream of decoded events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<SseEvent>> + Send>>;

/// Decode events from a stream of byte chunks.
///
/// The returned stream ends when the input ends (after applying the
/// close policy in `config`), or right after yielding the first error:
/// an invalid config, an input error wrapped as [`SseError::Transport`], or
/// [`SseError::BufferOverflow`]. Events completed before an overflow are
/// yielded first.
pub fn event_stream<S, B, E>(input: S, config: FramerConfig) -> EventStream
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<Box<dyn std::error::Error + Send + Sync>> + Send + 'static,
{
    let stream = async_stream::stream! {
        let mut parser = match BoundedParser::new(config) {
            Ok(parser) => parser,
            Err(e) => {
                yield Err(e);
                return;
            }
        };

        futures::pin_mut!(input);
        while let Some(chunk_result) = input.next().await {
            let chunk = match chunk_result {
                Ok(chunk) => chunk,
                Err(e) => {
                    let err = SseError::transport(e);
                    tracing::debug!(error = %err, "SSE input stream failed");
                    yield Err(err);
                    return;
                }
            };

            match parser.feed(chunk.as_ref()) {
                Ok(events) => {
                    for event in events {
                        yield Ok(event);
                    }
                }
                Err(e) => {
                    yield Err(e);
                    return;
                }
            }

            if let Err(e) = parser.check() {
                yield Err(e);
                return;
            }
        }

        match parser.finish() {
            Ok(Some(event)) => {
                yield Ok(event);
            }
            Ok(None) => {}
            Err(e) => {
                yield Err(e);
            }
        }
    };

    Box::pin(stream)
}
