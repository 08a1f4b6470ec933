/// A boundary that closes the pending line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Host renders this as a space followed by a vertical tab.
    LineBreak,
    /// Host renders this as a space followed by a carriage return.
    ParagraphBreak,
}

impl Terminator {
    /// The raw text written into the snapshot for the host to convert.
    pub fn source(self) -> &'static str {
        match self {
            Terminator::LineBreak => "\r\n",
            Terminator::ParagraphBreak => "\r\n\r\n",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Terminator::LineBreak => "line",
            Terminator::ParagraphBreak => "paragraph",
        }
    }
}

/// Rendered width the host allocates to each terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminatorWidths {
    pub line_break: usize,
    pub paragraph_break: usize,
}

impl TerminatorWidths {
    pub fn width_of(&self, terminator: Terminator) -> usize {
        match terminator {
            Terminator::LineBreak => self.line_break,
            Terminator::ParagraphBreak => self.paragraph_break,
        }
    }
}

impl Default for TerminatorWidths {
    fn default() -> Self {
        Self {
            line_break: 2,
            paragraph_break: 2,
        }
    }
}
