// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The per-line search driver.
//!
//! Reads lines in order, matches each one, and forwards matching lines to
//! the report printer. Owns the run tally: zero-match lines produce no
//! output but still advance the line number.

use std::io::BufRead;

use termcolor::WriteColor;
use tracing::debug;

use crate::error::SearchError;
use crate::matcher::Pattern;
use crate::render::{Markers, render_line};
use crate::report::ReportPrinter;
use crate::scanner::LineScanner;

/// Totals for one completed scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Lines read from the input.
    pub lines_scanned: u64,
    /// Lines with at least one match.
    pub matched_lines: u64,
    /// Total occurrences across the whole input.
    pub total_matches: u64,
}

/// Scan `reader` to exhaustion, printing each matching line and the final
/// summary. A read failure aborts the scan; no summary is printed then.
pub fn scan<R: BufRead, W: WriteColor>(
    reader: R,
    pattern: &Pattern,
    markers: &Markers,
    printer: &mut ReportPrinter<W>,
) -> Result<SearchOutcome, SearchError> {
    let mut scanner = LineScanner::new(reader);
    let mut outcome = SearchOutcome::default();

    printer.begin().map_err(SearchError::Write)?;
    loop {
        let line = match scanner.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(source) => {
                return Err(SearchError::Read { line: scanner.lines_read() + 1, source });
            }
        };
        outcome.lines_scanned = line.number;

        let matches = pattern.find_in(&line.text);
        if matches.is_empty() {
            continue;
        }
        outcome.matched_lines += 1;
        outcome.total_matches += matches.count() as u64;

        let rendered = render_line(&line.text, &matches, markers);
        printer
            .matched_line(line.number, &rendered)
            .map_err(SearchError::Write)?;
    }
    printer.summary(outcome.total_matches).map_err(SearchError::Write)?;

    debug!(
        lines = outcome.lines_scanned,
        matched = outcome.matched_lines,
        total = outcome.total_matches,
        "scan complete"
    );
    Ok(outcome)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
