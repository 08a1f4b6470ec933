//! # rendered-index-engine
//!
//! Builds a document out of text fragments and reports, for every fragment,
//! the offsets it will occupy once a host application has rendered the
//! document. The host rewrites line and paragraph breaks into its own control
//! codes and swallows a trailing space at each break, so rendered offsets
//! drift away from plain string offsets. [`IndexedBuilder`] keeps its counter
//! in step with those rules.
//!
//! ## Modules
//!
//! - [`builder`]: the [`IndexedBuilder`] and its absorption rules
//! - [`line`]: per-line helpers and [`LineKind`] classification
//! - [`terminator`]: line/paragraph breaks and their rendered widths
//! - [`span`]: inclusive rendered offset pairs
//! - [`readback`]: checking offsets against text read back from the host
//!
//! Offsets are counted in UTF-16 code units throughout.

pub mod builder;
pub mod line;
pub mod readback;
pub mod span;
pub mod terminator;

pub use builder::IndexedBuilder;
pub use line::{
    LineKind, classify_line, is_all_spaces, sp_to_nbsp, strip_breaks, trailing_space_count,
};
pub use readback::{Expectations, ReadbackError, ReadbackOptions, describe_chars};
pub use span::Span;
pub use terminator::{Terminator, TerminatorWidths};
