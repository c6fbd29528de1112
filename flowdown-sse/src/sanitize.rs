//! Record sanitizer
//!
//! Streams may mix `\n` and `\r\n` inside a single record, or leave separator
//! remnants at the end of one when the other encoding won the boundary scan.
//! Sanitizing removes trailing CR/LF bytes and rewrites every internal line
//! terminator to a bare `\n` so the decoder never sees a `\r`.

const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Normalize a raw record.
///
/// 1. Strip every trailing `\r` or `\n`.
/// 2. Split on `\n`, strip trailing `\r`s from each line, rejoin with `\n`.
///
/// An empty result is returned as-is; deciding whether it means anything is
/// left to the decoder.
pub fn sanitize_record(raw: &[u8]) -> Vec<u8> {
    let end = raw
        .iter()
        .rposition(|&b| b != CR && b != LF)
        .map_or(0, |pos| pos + 1);
    let body = &raw[..end];

    let mut clean = Vec::with_capacity(body.len());
    for (i, line) in body.split(|&b| b == LF).enumerate() {
        if i > 0 {
            clean.push(LF);
        }
        clean.extend_from_slice(trim_trailing_cr(line));
    }
    clean
}

fn trim_trailing_cr(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != CR)
        .map_or(0, |pos| pos + 1);
    &line[..end]
}
