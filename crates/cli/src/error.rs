// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error kinds and process exit codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors a search run can end with. All of them are terminal for the run;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search string was empty. An empty pattern has no sensible
    /// occurrence semantics, so it is rejected before any scanning.
    #[error("search string must not be empty")]
    EmptyPattern,

    /// The input file could not be opened for reading.
    #[error("failed to open {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line from the input failed. Scanning halts here and no
    /// summary is printed.
    #[error("read failed at line {line}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    /// Writing the report to the output stream failed.
    #[error("failed to write report")]
    Write(#[source] io::Error),
}

/// Process exit codes. Argument errors exit through clap with its own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
}

impl ExitCode {
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
