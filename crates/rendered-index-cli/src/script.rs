//! Build scripts: one builder operation per line.
//!
//! ```text
//! # comment
//! line
//! para
//! append ほげ
//! line ぴよ
//! para ふがもげ
//! ```
//!
//! Text starts after the first space and is taken verbatim, trailing spaces
//! included. `\r`, `\n` and `\\` are unescaped so embedded breaks can be
//! written down.

use anyhow::{Result, bail};
use rendered_index_engine::{IndexedBuilder, Span, Terminator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Append(String),
    Terminated(String, Terminator),
}

impl Op {
    pub fn text(&self) -> &str {
        match self {
            Op::Append(text) | Op::Terminated(text, _) => text,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Op::Append(_) => "append",
            Op::Terminated(_, Terminator::LineBreak) => "line",
            Op::Terminated(_, Terminator::ParagraphBreak) => "para",
        }
    }

    pub fn apply(&self, builder: &mut IndexedBuilder) -> Span {
        match self {
            Op::Append(text) => builder.append(text),
            Op::Terminated(text, terminator) => builder.append_terminated(text, *terminator),
        }
    }
}

pub fn parse(source: &str) -> Result<Vec<Op>> {
    let mut ops = Vec::new();

    for (number, raw) in source.lines().enumerate() {
        if raw.trim().is_empty() || raw.starts_with('#') {
            continue;
        }

        let (keyword, rest) = raw.split_once(' ').unwrap_or((raw, ""));
        let text = unescape(rest).map_err(|e| anyhow::anyhow!("line {}: {e}", number + 1))?;

        let op = match keyword {
            "append" => Op::Append(text),
            "line" => Op::Terminated(text, Terminator::LineBreak),
            "para" => Op::Terminated(text, Terminator::ParagraphBreak),
            other => bail!("line {}: unknown operation '{other}'", number + 1),
        };
        ops.push(op);
    }

    Ok(ops)
}

fn unescape(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => bail!("unsupported escape '\\{other}'"),
            None => bail!("dangling '\\' at end of line"),
        }
    }

    Ok(out)
}
