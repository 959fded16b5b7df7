//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::process::Command;

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use tempfile::NamedTempFile;

/// Returns a Command configured to run the ctrlf binary
pub fn ctrlf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ctrlf"))
}

/// Write `lines` to a temp file, one per line, each with a trailing newline.
pub fn input_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Write raw content to a temp file, exactly as given.
pub fn input_file_raw(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}
