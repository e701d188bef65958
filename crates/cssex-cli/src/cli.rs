use clap::{Args, Parser, Subcommand};
use cssex_core::Options;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cssex")]
#[command(about = "Flattens nested CSS with variables into plain CSS", version)]
pub struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a source file to CSS
    Build {
        input: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the flattened rules as JSON instead of CSS
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// JSON options file; the flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// No line breaks or indentation
    #[arg(long)]
    pub compact: bool,

    /// Indent with tabs instead of four spaces
    #[arg(long)]
    pub tabs: bool,

    /// Keep selectors that have no declarations of their own
    #[arg(long)]
    pub keep_empty: bool,

    /// Fail on malformed input instead of recovering
    #[arg(long)]
    pub strict: bool,
}

impl FormatArgs {
    pub fn options(&self) -> cssex_core::Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        if self.compact {
            options = options.compact();
        }
        if self.tabs {
            options = options.tabs();
        }
        if self.keep_empty {
            options = options.keep_empty();
        }
        if self.strict {
            options = options.strict();
        }
        Ok(options)
    }
}
