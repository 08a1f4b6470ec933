//! Checking predicted offsets against text read back from the host.
//!
//! After the snapshot has been handed to the host and its rendered text read
//! back, the spans returned by [`IndexedBuilder`](crate::IndexedBuilder)
//! should land on the same characters. [`Expectations`] collects the
//! characters expected at the edges of each span and [`Expectations::verify`]
//! checks them.

mod dump;

pub use dump::describe_chars;

use crate::line::{strip_breaks, utf16_len};
use crate::span::Span;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReadbackError {
    #[error("Expected {expected:?} at index {index}, but readback is only {len} units long")]
    OutOfRange {
        index: usize,
        expected: char,
        len: usize,
    },
    #[error("Expected {expected:?} at index {index}, found {actual:?}")]
    Mismatch {
        index: usize,
        expected: char,
        actual: char,
    },
}

/// Knobs for comparing against host readback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadbackOptions {
    /// Accept U+00A0 wherever a plain space is expected.
    pub nbsp_equivalent: bool,
}

impl Default for ReadbackOptions {
    fn default() -> Self {
        Self {
            nbsp_equivalent: true,
        }
    }
}

/// Characters expected at given rendered offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectations {
    entries: Vec<(usize, char)>,
}

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects `c` at rendered offset `index`.
    pub fn push(&mut self, index: usize, c: char) {
        self.entries.push((index, c));
    }

    /// Records the first and last visible character of a fragment.
    ///
    /// `fragment` is the text passed to the call that returned `span`. The
    /// last visible character is looked up `end - start` units into the
    /// fragment, which skips a trailing space absorbed by a break. Spans that
    /// cover nothing of the fragment are ignored.
    pub fn record(&mut self, span: Span, fragment: &str) {
        let text = strip_breaks(fragment);
        if text.is_empty() || span.is_empty() || span.is_collapsed() {
            return;
        }

        let last = span.end - span.start;
        if last >= utf16_len(&text) {
            return;
        }

        if let Some(first) = char_at_unit(&text, 0) {
            self.push(span.start, first);
        }
        if let Some(c) = char_at_unit(&text, last) {
            self.push(span.end, c);
        }
    }

    pub fn entries(&self) -> &[(usize, char)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks every expectation against `readback`, indexed in UTF-16 units.
    ///
    /// Stops at the first failure.
    pub fn verify(&self, readback: &str, options: ReadbackOptions) -> Result<(), ReadbackError> {
        let units: Vec<u16> = readback.encode_utf16().collect();

        for &(index, expected) in &self.entries {
            let Some(actual) = decode_at(&units, index) else {
                return Err(ReadbackError::OutOfRange {
                    index,
                    expected,
                    len: units.len(),
                });
            };

            if !chars_match(expected, actual, options) {
                log::debug!("readback mismatch at {index}: expected {expected:?}, got {actual:?}");
                return Err(ReadbackError::Mismatch {
                    index,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}

fn chars_match(expected: char, actual: char, options: ReadbackOptions) -> bool {
    expected == actual || (options.nbsp_equivalent && expected == ' ' && actual == '\u{00a0}')
}

/// Character starting at UTF-16 unit `index` of `s`.
fn char_at_unit(s: &str, index: usize) -> Option<char> {
    let units: Vec<u16> = s.encode_utf16().collect();
    decode_at(&units, index)
}

/// Decodes the character starting at `index`. A lone surrogate decodes to
/// U+FFFD so it can still be reported as a mismatch.
fn decode_at(units: &[u16], index: usize) -> Option<char> {
    let tail = units.get(index..)?;
    char::decode_utf16(tail.iter().copied())
        .next()
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
}
