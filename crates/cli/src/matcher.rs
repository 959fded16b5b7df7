// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Literal substring matching.
//!
//! One pattern per run, matched byte-exact and case-sensitive against one
//! line at a time. Occurrences are found left to right and never overlap:
//! after a match at offset `o`, scanning resumes at `o + len`.

use std::ops::Range;

use memchr::memmem;

use crate::error::SearchError;

/// The compiled search string. Non-empty, immutable for the whole run.
pub struct Pattern {
    text: String,
    finder: memmem::Finder<'static>,
}

impl Pattern {
    /// Compile a pattern. Rejects the empty string.
    pub fn new(text: impl Into<String>) -> Result<Self, SearchError> {
        let text = text.into();
        if text.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        let finder = memmem::Finder::new(text.as_bytes()).into_owned();
        Ok(Self { text, finder })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte length of the pattern, which is also the length of every span.
    pub fn span_len(&self) -> usize {
        self.text.len()
    }

    /// Find every non-overlapping occurrence of the pattern in `line`.
    ///
    /// Offsets are byte offsets, in increasing order. The finder yields
    /// leftmost matches and resumes past each full match, so `"aa"` in
    /// `"aaaa"` matches at 0 and 2, never at 1.
    pub fn find_in(&self, line: &str) -> MatchSet {
        let offsets = self.finder.find_iter(line.as_bytes()).collect();
        MatchSet { offsets, span_len: self.text.len() }
    }
}

/// The matches of one line: ordered, non-overlapping start offsets plus the
/// shared span length. Built fresh per line; grows without bound.
pub struct MatchSet {
    offsets: Vec<usize>,
    span_len: usize,
}

impl MatchSet {
    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Byte ranges of the matched spans, in offset order.
    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let len = self.span_len;
        self.offsets.iter().map(move |&start| start..start + len)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
