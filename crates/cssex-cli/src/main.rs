mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use cssex_core::{emit_css, load_source, parse, Error};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const EXIT_SYNTAX_ERROR: u8 = 1;
const EXIT_IO_ERROR: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            if err.span().is_some() {
                ExitCode::from(EXIT_SYNTAX_ERROR)
            } else {
                ExitCode::from(EXIT_IO_ERROR)
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Build {
            input,
            output,
            json,
            format,
        } => {
            let options = format.options()?;
            let source = load_source(&input)?;
            let stylesheet = parse(&source, &options)?;
            tracing::info!(
                input = %input.display(),
                rules = stylesheet.rules.len(),
                variables = stylesheet.variables.len(),
                "compiled"
            );

            let rendered = if json {
                let mut text = serde_json::to_string_pretty(&stylesheet.rules)?;
                text.push('\n');
                text
            } else {
                emit_css(&stylesheet.rules, &options)
            };
            write_output(output.as_deref(), &rendered)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), Error> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| Error::Output {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
