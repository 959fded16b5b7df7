// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.
//!
//! Color is resolved once from the output stream: Auto on a terminal,
//! Never otherwise, so piped report output carries no escape bytes at all.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve the color choice for a stream from its tty-ness.
pub fn resolve_color(is_tty: bool) -> ColorChoice {
    if is_tty { ColorChoice::Auto } else { ColorChoice::Never }
}

/// Color choice for stdout.
pub fn stdout_choice() -> ColorChoice {
    resolve_color(std::io::stdout().is_terminal())
}

/// Color scheme for report banners.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold green, used for `|Line #n|` and `|Total Matches: n|`.
    pub fn banner() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
