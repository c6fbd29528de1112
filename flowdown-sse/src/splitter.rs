//! Record splitter
//!
//! Cuts the confirmed prefix of the buffer into raw records on every
//! occurrence of the winning separator. Plain split semantics: `N` delimiters
//! give `N + 1` pieces and empty pieces are kept (the decoder drops them).

use crate::scanner::Separator;

/// Iterator over raw records in a confirmed byte range.
///
/// Single forward pass; each byte is inspected at most once per candidate
/// separator start.
#[derive(Debug, Clone)]
pub struct RecordSplit<'a> {
    remaining: Option<&'a [u8]>,
    delimiter: &'static [u8],
}

impl<'a> Iterator for RecordSplit<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let rest = self.remaining?;
        match find(rest, self.delimiter) {
            Some(pos) => {
                self.remaining = Some(&rest[pos + self.delimiter.len()..]);
                Some(&rest[..pos])
            }
            None => {
                self.remaining = None;
                Some(rest)
            }
        }
    }
}

/// Split `confirmed` on every occurrence of `separator`
pub fn split_records(confirmed: &[u8], separator: Separator) -> RecordSplit<'_> {
    RecordSplit {
        remaining: Some(confirmed),
        delimiter: separator.as_bytes(),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
