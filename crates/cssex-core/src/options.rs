//! Parse and output options.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options controlling parsing and CSS output.
///
/// Can be read from a JSON file; missing keys take their defaults:
///
/// ```json
/// { "emitWhitespace": true, "useSpacesForIndent": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Line breaks and spacing in the output (default: true)
    pub emit_whitespace: bool,

    /// Four spaces instead of one tab per indent (default: true).
    /// Only matters when `emit_whitespace` is set.
    pub use_spaces_for_indent: bool,

    /// Drop selectors that have no direct declarations (default: true)
    pub prune_empty_selectors: bool,

    /// Report malformed syntax as an error instead of recovering (default: false)
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            emit_whitespace: true,
            use_spaces_for_indent: true,
            prune_empty_selectors: true,
            strict: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything on one line, no indentation.
    pub fn compact(mut self) -> Self {
        self.emit_whitespace = false;
        self
    }

    /// Indent with a tab character.
    pub fn tabs(mut self) -> Self {
        self.use_spaces_for_indent = false;
        self
    }

    pub fn keep_empty(mut self) -> Self {
        self.prune_empty_selectors = false;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub(crate) fn indent(&self) -> &'static str {
        match (self.emit_whitespace, self.use_spaces_for_indent) {
            (false, _) => "",
            (true, true) => "    ",
            (true, false) => "\t",
        }
    }

    /// Load options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let options = serde_json::from_str(&data).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), ?options, "loaded options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(options.emit_whitespace);
        assert!(options.use_spaces_for_indent);
        assert!(options.prune_empty_selectors);
        assert!(!options.strict);
        assert_eq!(options.indent(), "    ");
    }

    #[test]
    fn builders() {
        assert_eq!(Options::new().tabs().indent(), "\t");
        assert_eq!(Options::new().tabs().compact().indent(), "");
        assert!(!Options::new().keep_empty().prune_empty_selectors);
        assert!(Options::new().strict().strict);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: Options = serde_json::from_str(r#"{"useSpacesForIndent": false}"#).unwrap();
        assert_eq!(options, Options::new().tabs());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"emitWhitespace": false, "strict": true}}"#).unwrap();
        let options = Options::load(file.path()).unwrap();
        assert_eq!(options, Options::new().compact().strict());
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"minify": true}}"#).unwrap();
        let err = Options::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Options::load(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
