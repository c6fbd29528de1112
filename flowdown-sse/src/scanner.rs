//! Boundary scanner
//!
//! Finds the right-most complete record separator in the buffered bytes.
//! Two encodings are legal on the wire, `\n\n` and `\r\n\r\n`; the one whose
//! last occurrence ends furthest into the buffer wins, since its end marks the
//! furthest-confirmed complete prefix.

/// A legal record separator encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `\n\n`
    LfLf,
    /// `\r\n\r\n`
    CrLfCrLf,
}

impl Separator {
    /// All separators in declaration order. On an end-offset tie the earlier
    /// entry wins.
    pub const ALL: [Separator; 2] = [Separator::LfLf, Separator::CrLfCrLf];

    /// Length of the longest separator; a separator can straddle at most
    /// `MAX_LEN - 1` bytes of previously scanned data.
    pub const MAX_LEN: usize = 4;

    /// Wire bytes of this separator
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Separator::LfLf => b"\n\n",
            Separator::CrLfCrLf => b"\r\n\r\n",
        }
    }

    pub fn byte_len(self) -> usize {
        self.as_bytes().len()
    }
}

/// The last confirmed separator occurrence in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// The separator that won the scan
    pub separator: Separator,
    /// Offset one past the last byte of its right-most occurrence
    pub end: usize,
}

/// Locate the right-most-ending separator occurrence in `buf`.
///
/// `search_from` is the offset before which the caller knows no complete
/// separator exists (the length of the tail retained by the previous call).
/// Scanning starts `MAX_LEN - 1` bytes earlier so that separators straddling
/// the old tail and the new chunk are still found. Pass `0` to scan everything.
///
/// Returns `None` when no separator occurs.
pub fn find_last_boundary(buf: &[u8], search_from: usize) -> Option<Boundary> {
    let start = search_from
        .min(buf.len())
        .saturating_sub(Separator::MAX_LEN - 1);
    let window = &buf[start..];

    let mut best: Option<Boundary> = None;
    for separator in Separator::ALL {
        let Some(pos) = rfind(window, separator.as_bytes()) else {
            continue;
        };
        let end = start + pos + separator.byte_len();
        match best {
            Some(current) if current.end >= end => {}
            _ => best = Some(Boundary { separator, end }),
        }
    }
    best
}

/// Start offset of the last occurrence of `needle` in `haystack`
fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}
