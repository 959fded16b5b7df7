//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

/// Ctrl+F for the terminal: search a text file and highlight every occurrence
#[derive(Parser)]
#[command(name = "ctrlf")]
#[command(version, about, long_about = None)]
#[command(styles = help_styles())]
pub struct Cli {
    /// Text file to search
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// String to search for (must not be empty)
    #[arg(value_name = "STRING", value_parser = NonEmptyStringValueParser::new())]
    pub pattern: String,
}

/// Help styling. Headers match the report banner color.
fn help_styles() -> clap::builder::Styles {
    use anstyle::{AnsiColor, Style};

    clap::builder::Styles::styled()
        .header(Style::new().bold().fg_color(Some(AnsiColor::Green.into())))
        .usage(Style::new().bold().fg_color(Some(AnsiColor::Green.into())))
        .literal(Style::new().bold())
        .placeholder(Style::new().fg_color(Some(AnsiColor::Cyan.into())))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
