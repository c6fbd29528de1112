//! Chunking must never change the decoded events
//!
//! Random well-formed streams (one line-ending convention per stream) are fed
//! whole, cut at random offsets, and one byte at a time. All three must yield
//! the events the stream was rendered from, in order, without duplicates.

use flowdown_sse::{SseEvent, SseParser};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::sample::Index;

fn event_strategy() -> impl Strategy<Value = SseEvent> {
    (
        option::of("[a-z0-9]{1,6}"),
        option::of("[a-z_]{1,10}"),
        vec("[a-zA-Z0-9 {}\":,.é🙂]{0,12}", 1..4),
        option::of(0u64..100_000),
    )
        .prop_map(|(id, event_type, lines, retry)| SseEvent {
            id,
            event_type,
            data: lines.join("\n"),
            retry,
        })
}

fn render(events: &[SseEvent], crlf: bool) -> Vec<u8> {
    let eol = if crlf { "\r\n" } else { "\n" };
    let mut out = String::new();
    for event in events {
        if let Some(id) = &event.id {
            out.push_str(&format!("id: {id}{eol}"));
        }
        if let Some(event_type) = &event.event_type {
            out.push_str(&format!("event: {event_type}{eol}"));
        }
        if let Some(retry) = event.retry {
            out.push_str(&format!("retry: {retry}{eol}"));
        }
        for line in event.data.split('\n') {
            out.push_str(&format!("data: {line}{eol}"));
        }
        out.push_str(eol);
    }
    out.into_bytes()
}

fn feed_at_cuts(input: &[u8], cuts: &[Index]) -> Vec<SseEvent> {
    let mut offsets: Vec<usize> = cuts.iter().map(|i| i.index(input.len() + 1)).collect();
    offsets.sort_unstable();

    let mut parser = SseParser::new();
    let mut events = Vec::new();
    let mut start = 0;
    for offset in offsets {
        events.extend(parser.parse(&input[start..offset]));
        start = offset;
    }
    events.extend(parser.parse(&input[start..]));
    assert!(parser.pending().is_empty());
    events
}

proptest! {
    #[test]
    fn whole_stream_decodes_to_source_events(
        events in vec(event_strategy(), 1..8),
        crlf in any::<bool>(),
    ) {
        let input = render(&events, crlf);
        let mut parser = SseParser::new();
        prop_assert_eq!(parser.parse(&input), events);
        prop_assert!(parser.pending().is_empty());
    }

    #[test]
    fn random_cuts_do_not_change_events(
        events in vec(event_strategy(), 1..8),
        crlf in any::<bool>(),
        cuts in vec(any::<Index>(), 0..12),
    ) {
        let input = render(&events, crlf);
        prop_assert_eq!(feed_at_cuts(&input, &cuts), events);
    }

    #[test]
    fn trickle_feed_yields_every_event_once(
        events in vec(event_strategy(), 1..5),
        crlf in any::<bool>(),
    ) {
        let input = render(&events, crlf);
        let mut parser = SseParser::new();
        let decoded: Vec<SseEvent> = input
            .iter()
            .flat_map(|byte| parser.parse(std::slice::from_ref(byte)))
            .collect();
        prop_assert_eq!(decoded, events);
    }

    #[test]
    fn pending_tail_never_holds_a_separator(
        input in vec(prop_oneof![Just(b'\n'), Just(b'\r'), Just(b'a'), Just(b':')], 0..64),
        cuts in vec(any::<Index>(), 0..6),
    ) {
        let mut offsets: Vec<usize> = cuts.iter().map(|i| i.index(input.len() + 1)).collect();
        offsets.sort_unstable();
        offsets.push(input.len());

        let mut parser = SseParser::new();
        let mut start = 0;
        for offset in offsets {
            parser.parse(&input[start..offset]);
            start = offset;
            let pending = parser.pending();
            prop_assert!(!pending.windows(2).any(|w| w == b"\n\n"));
            prop_assert!(!pending.windows(4).any(|w| w == b"\r\n\r\n"));
        }
    }
}
