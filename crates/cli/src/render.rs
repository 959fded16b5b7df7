// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line rendering with highlight markers.
//!
//! The renderer owns no policy: the begin/end marker pair is passed in, so
//! terminal escapes, test brackets, and marker-free output all go through
//! the same code path.

use crate::matcher::MatchSet;

/// ANSI blue background, the highlight used on color terminals.
const HIGHLIGHT_BEGIN: &str = "\x1b[44m";
/// ANSI reset.
const HIGHLIGHT_END: &str = "\x1b[0m";

/// A begin/end delimiter pair wrapped around each matched span.
#[derive(Debug, Clone)]
pub struct Markers {
    begin: String,
    end: String,
}

impl Markers {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self { begin: begin.into(), end: end.into() }
    }

    /// Blue-background highlight for color terminals.
    pub fn highlight() -> Self {
        Self::new(HIGHLIGHT_BEGIN, HIGHLIGHT_END)
    }

    /// Empty markers: rendered output is byte-identical to the input line.
    pub fn none() -> Self {
        Self::new("", "")
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// Render `line` with every matched span wrapped in the marker pair.
///
/// Every input byte passes through unchanged and in order; markers are
/// inserted only at span boundaries. Each span gets exactly one begin and
/// one end marker, single-byte spans included. Spans never overlap
/// (guaranteed by the matcher), so markers never nest.
pub fn render_line(line: &str, matches: &MatchSet, markers: &Markers) -> String {
    if matches.is_empty() {
        return line.to_string();
    }

    let overhead = matches.count() * (markers.begin.len() + markers.end.len());
    let mut out = String::with_capacity(line.len() + overhead);
    let mut cursor = 0;
    for span in matches.spans() {
        out.push_str(&line[cursor..span.start]);
        out.push_str(&markers.begin);
        out.push_str(&line[span.start..span.end]);
        out.push_str(&markers.end);
        cursor = span.end;
    }
    out.push_str(&line[cursor..]);
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
