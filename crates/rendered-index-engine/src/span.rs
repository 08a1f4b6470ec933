/// An inclusive `[start, end]` range of rendered offsets.
///
/// Unlike most ranges in Rust, `end` points at the last unit of the fragment,
/// not one past it. A plain append that added nothing reports the zero-width
/// pair `(next, next)`, and a terminator whose text was entirely absorbed can
/// report `end < start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Rendered offset of the first unit.
    pub start: usize,
    /// Rendered offset of the last unit.
    pub end: usize,
    /// Set for the `(next, next)` pair of an append that added nothing.
    empty: bool,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            empty: false,
        }
    }

    /// Zero-width pair at `index`.
    pub(crate) fn empty_at(index: usize) -> Self {
        Self {
            start: index,
            end: index,
            empty: true,
        }
    }

    /// Number of rendered units covered. Zero for the empty-append pair and
    /// for collapsed spans.
    #[must_use]
    pub fn width(self) -> usize {
        if self.empty {
            return 0;
        }
        (self.end + 1).saturating_sub(self.start)
    }

    /// Returns true for the pair reported by an append that added nothing.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.empty
    }

    /// Returns true if `end` falls before `start`.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.end < self.start
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}
