//! Per-line text helpers and line classification.
//!
//! Everything here is pure and works on a single string. Lengths are counted
//! in UTF-16 code units because that is how the host addresses its rendered
//! text.

const SPACE: char = ' ';
const NBSP: char = '\u{00a0}';

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Returns `s` with every CR and LF removed.
///
/// Terminators are always emitted by the builder itself, so raw breaks in
/// caller input are dropped before any counting happens.
pub fn strip_breaks(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Number of consecutive U+0020 spaces at the end of `s`.
pub fn trailing_space_count(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == SPACE).count()
}

/// True when `s` contains nothing but U+0020 spaces.
///
/// The empty string counts as all spaces; use [`classify_line`] when empty
/// needs to be told apart.
pub fn is_all_spaces(s: &str) -> bool {
    s.chars().all(|c| c == SPACE)
}

/// Replaces every U+0020 with U+00A0, as the host does on readback.
pub fn sp_to_nbsp(s: &str) -> String {
    s.replace(SPACE, &NBSP.to_string())
}

/// How a pending line looks at the moment it gets terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Nothing at all.
    Empty,
    /// One or more spaces and nothing else.
    OnlySpaces,
    /// Ordinary text with no trailing space.
    EndsWithNoSpace,
    /// Ordinary text followed by one or more spaces.
    EndsWithSpaces,
}

/// Classifies a line. Checks run in declaration order of [`LineKind`], so
/// the first match wins.
pub fn classify_line(s: &str) -> LineKind {
    if s.is_empty() {
        LineKind::Empty
    } else if is_all_spaces(s) {
        LineKind::OnlySpaces
    } else if trailing_space_count(s) == 0 {
        LineKind::EndsWithNoSpace
    } else {
        LineKind::EndsWithSpaces
    }
}
