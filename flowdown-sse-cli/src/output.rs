use crate::cli::OutputFormat;
use crate::error::CliResult;
use flowdown_sse::SseEvent;

/// Render one event in the requested format, including its trailing newline(s).
pub fn format_event(event: &SseEvent, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let mut line = serde_json::to_string(event)?;
            line.push('\n');
            Ok(line)
        }
        OutputFormat::Text => Ok(format_as_text(event)),
    }
}

/// Canonical wire form: LF line endings, one space after each colon,
/// fields in `id`, `event`, `retry`, `data` order.
fn format_as_text(event: &SseEvent) -> String {
    let mut out = String::new();
    if let Some(id) = &event.id {
        out.push_str(&format!("id: {id}\n"));
    }
    if let Some(event_type) = &event.event_type {
        out.push_str(&format!("event: {event_type}\n"));
    }
    if let Some(retry) = event.retry {
        out.push_str(&format!("retry: {retry}\n"));
    }
    for line in event.data.split('\n') {
        out.push_str(&format!("data: {line}\n"));
    }
    out.push('\n');
    out
}
