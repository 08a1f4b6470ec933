//! Offset-tracking document builder.
//!
//! [`IndexedBuilder`] accumulates text for a host that re-renders line and
//! paragraph breaks, and hands back the offsets each fragment will occupy in
//! the host's rendered text. The host does not count characters the way a
//! plain string does:
//!
//! - A line or paragraph break renders as a fixed-width control sequence.
//! - One trailing space right before a break is folded into the break.
//! - An empty line renders as a single space before the break.
//!
//! ```
//! use rendered_index_engine::IndexedBuilder;
//!
//! let mut builder = IndexedBuilder::new();
//! let hello = builder.append("hello ");
//! let world = builder.append_line("world  ");
//!
//! assert_eq!((hello.start, hello.end), (0, 5));
//! // the last of the two trailing spaces belongs to the break
//! assert_eq!((world.start, world.end), (6, 11));
//! assert_eq!(builder.next_index(), 14);
//! assert_eq!(builder.snapshot(), "hello world  \r\n");
//! ```

use std::fmt;

use crate::line::{LineKind, classify_line, strip_breaks, trailing_space_count, utf16_len};
use crate::span::Span;
use crate::terminator::{Terminator, TerminatorWidths};

/// Text emitted in place of an empty line.
const EMPTY_LINE_PLACEHOLDER: &str = " ";

/// How much of a terminated line's text the host keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyRule {
    /// Nothing to keep; a single placeholder space is emitted.
    Placeholder,
    /// Every appended unit is visible.
    Full,
    /// The break swallows the last trailing space.
    AbsorbOne,
}

impl BodyRule {
    /// Host absorption table. Derived from observed host behaviour, not from
    /// any documented format.
    fn for_line(kind: LineKind, line: &str) -> Self {
        match kind {
            LineKind::Empty => BodyRule::Placeholder,
            LineKind::OnlySpaces if trailing_space_count(line) == 1 => BodyRule::Full,
            LineKind::OnlySpaces => BodyRule::AbsorbOne,
            LineKind::EndsWithSpaces => BodyRule::AbsorbOne,
            LineKind::EndsWithNoSpace => BodyRule::Full,
        }
    }
}

/// Builds a document while tracking rendered offsets.
#[derive(Debug, Clone, Default)]
pub struct IndexedBuilder {
    /// Terminated text, exactly as it will be handed to the host.
    rendered: String,
    /// Text appended since the last terminator.
    pending_line: String,
    /// Rendered offset of the next unit to be emitted.
    next_index: usize,
    widths: TerminatorWidths,
}

impl IndexedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a host that renders terminators with other widths.
    pub fn with_widths(widths: TerminatorWidths) -> Self {
        Self {
            widths,
            ..Self::default()
        }
    }

    /// Appends text to the current line without closing it.
    ///
    /// CR and LF are dropped. When nothing is left the builder is unchanged
    /// and the zero-width span `(next_index, next_index)` is returned.
    pub fn append(&mut self, text: &str) -> Span {
        let appendee = strip_breaks(text);
        if appendee.is_empty() {
            return Span::empty_at(self.next_index);
        }

        self.pending_line.push_str(&appendee);

        let start = self.next_index;
        self.next_index += utf16_len(&appendee);
        Span::new(start, self.next_index - 1)
    }

    /// Appends text and closes the line with a line break.
    ///
    /// Pass `""` to close the line without adding text.
    pub fn append_line(&mut self, text: &str) -> Span {
        self.append_terminated(text, Terminator::LineBreak)
    }

    /// Appends text and closes the line with a paragraph break.
    ///
    /// Pass `""` to close the line without adding text.
    pub fn append_paragraph(&mut self, text: &str) -> Span {
        self.append_terminated(text, Terminator::ParagraphBreak)
    }

    /// Appends text, then closes the pending line with `terminator`.
    ///
    /// The returned span covers only the visible text of this call; the
    /// terminator's own width is added to the index afterwards.
    pub fn append_terminated(&mut self, text: &str, terminator: Terminator) -> Span {
        let appendee = strip_breaks(text);
        let appended = utf16_len(&appendee);
        self.pending_line.push_str(&appendee);

        let start = self.next_index;
        let kind = classify_line(&self.pending_line);

        match BodyRule::for_line(kind, &self.pending_line) {
            BodyRule::Placeholder => {
                self.rendered.push_str(EMPTY_LINE_PLACEHOLDER);
                self.next_index += utf16_len(EMPTY_LINE_PLACEHOLDER);
            }
            BodyRule::Full => {
                self.rendered.push_str(&self.pending_line);
                self.next_index += appended;
            }
            BodyRule::AbsorbOne => {
                self.rendered.push_str(&self.pending_line);
                // The absorbed space may have been counted by an earlier
                // `append`, in which case the index steps back by one.
                self.next_index = self.next_index + appended - 1;
            }
        }

        // Never underflows: a non-empty pending line was counted into the index.
        let span = Span::new(start, self.next_index - 1);

        self.rendered.push_str(terminator.source());
        self.next_index += self.widths.width_of(terminator);
        self.pending_line.clear();

        log::trace!(
            "{} break after {:?} line: span {}..={}, next index {}",
            terminator.name(),
            kind,
            span.start,
            span.end,
            self.next_index
        );

        span
    }

    /// Terminated text built so far. The pending line is not included.
    pub fn snapshot(&self) -> &str {
        &self.rendered
    }

    /// Consumes the builder, returning the terminated text.
    pub fn into_string(self) -> String {
        self.rendered
    }

    /// Rendered offset the next appended unit will receive.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Text appended since the last terminator.
    pub fn pending_line(&self) -> &str {
        &self.pending_line
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty() && self.pending_line.is_empty()
    }
}

impl fmt::Display for IndexedBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
