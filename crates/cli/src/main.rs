//! ctrlf binary entry point.

use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;

use ctrlf::cli::Cli;
use ctrlf::color;
use ctrlf::error::{ExitCode, SearchError};
use ctrlf::matcher::Pattern;
use ctrlf::render::Markers;
use ctrlf::report::ReportPrinter;
use ctrlf::search;

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code.exit(),
        Err(err) => {
            eprintln!("ctrlf: {err:#}");
            ExitCode::Failure.exit()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let pattern = Pattern::new(cli.pattern.as_str())?;
    let file = File::open(&cli.file).map_err(|source| SearchError::FileOpen {
        path: cli.file.clone(),
        source,
    })?;

    let choice = color::stdout_choice();
    let markers = match choice {
        ColorChoice::Never => Markers::none(),
        _ => Markers::highlight(),
    };
    debug!(file = %cli.file.display(), pattern = pattern.as_str(), "starting scan");

    let mut printer = ReportPrinter::new(StandardStream::stdout(choice));
    search::scan(BufReader::new(file), &pattern, &markers, &mut printer)?;
    Ok(ExitCode::Success)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
