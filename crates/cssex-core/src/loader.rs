use crate::error::{Error, Result};
use crate::options::Options;
use crate::parser;
use crate::rules::Stylesheet;
use std::fs;
use std::path::Path;

/// Read a source file.
pub fn load_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a source file.
///
/// A file that cannot be read is not an error: it is reported with
/// `tracing::warn!` and an empty stylesheet is returned. Syntax errors
/// (strict mode) are still returned.
pub fn parse_file(path: impl AsRef<Path>, options: &Options) -> Result<Stylesheet> {
    let path = path.as_ref();
    let source = match load_source(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!("cannot parse '{}': {err}", path.display());
            return Ok(Stylesheet::default());
        }
    };
    tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
    parser::parse(&source, options)
}
