//! SSE events and the record decoder
//!
//! Recognized fields, one per line:
//! - `id:` event ID
//! - `event:` event type
//! - `data:` payload line (repeatable, joined with `\n`)
//! - `retry:` reconnection time in milliseconds
//!
//! At most one space after the colon is stripped. Everything else (comments
//! starting with `:`, unknown fields, blank lines) is ignored.

use std::borrow::Cow;

use serde::Serialize;

/// A decoded SSE event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SseEvent {
    /// Event ID (from `id:` field)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Event type (from `event:` field)
    #[serde(rename = "event", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Event data (from `data:` field(s), joined with newlines)
    pub data: String,
    /// Reconnection time (from `retry:` field)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<u64>,
}

impl SseEvent {
    /// Event carrying only `data`
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Event,
    Data,
    Retry,
}

const FIELDS: [(&str, Field); 4] = [
    ("id:", Field::Id),
    ("event:", Field::Event),
    ("data:", Field::Data),
    ("retry:", Field::Retry),
];

/// Split a line into a recognized field and its value
fn parse_field(line: &str) -> Option<(Field, &str)> {
    FIELDS.iter().find_map(|&(prefix, field)| {
        line.strip_prefix(prefix)
            .map(|value| (field, value.strip_prefix(' ').unwrap_or(value)))
    })
}

/// Decode a sanitized record into an event.
///
/// Returns `None` when the record carries no recognized field; such records
/// contribute nothing to the output. A non-numeric `retry:` is omitted and
/// does not count as a recognized field on its own.
pub fn decode_record(record: &[u8]) -> Option<SseEvent> {
    if record.is_empty() {
        return None;
    }

    let text = String::from_utf8_lossy(record);
    if let Cow::Owned(_) = text {
        tracing::warn!(
            bytes = record.len(),
            "Invalid UTF-8 in SSE record, replacing invalid sequences"
        );
    }

    let mut event = SseEvent::default();
    let mut data_lines: Vec<&str> = Vec::new();
    let mut recognized = false;

    for line in text.split('\n') {
        let Some((field, value)) = parse_field(line) else {
            if line.starts_with(':') {
                // Comment line (keepalive)
            } else if !line.is_empty() {
                tracing::debug!(line = %line, "Ignoring unrecognized SSE line");
            }
            continue;
        };

        match field {
            Field::Id => event.id = Some(value.to_string()),
            Field::Event => event.event_type = Some(value.to_string()),
            Field::Data => data_lines.push(value),
            Field::Retry => match value.parse::<u64>() {
                Ok(ms) => event.retry = Some(ms),
                Err(_) => {
                    tracing::debug!(value = %value, "Ignoring non-numeric retry value");
                    continue;
                }
            },
        }
        recognized = true;
    }

    if !recognized {
        tracing::debug!(bytes = record.len(), "Dropping SSE record with no recognized field");
        return None;
    }

    event.data = data_lines.join("\n");
    Some(event)
}
