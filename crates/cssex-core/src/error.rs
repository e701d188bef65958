use std::fmt;
use std::io;
use std::path::PathBuf;

/// A 1-based line/column position in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    pub const fn dummy() -> Self {
        Self { line: 0, column: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 && self.column == 0 {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Everything that can go wrong while loading, configuring or (in strict
/// mode) parsing a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize rules: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid options file '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("{span}: block opened here is never closed")]
    UnclosedBlock { span: Span },

    #[error("{span}: '}}' without a matching '{{'")]
    UnexpectedCloseBrace { span: Span },

    #[error("{span}: comment is never closed")]
    UnterminatedComment { span: Span },

    #[error("{span}: declaration '{text}' has no ':' separator")]
    MissingColon { span: Span, text: String },

    #[error("{span}: variable statement '{text}' has no '=' assignment")]
    MissingAssignment { span: Span, text: String },

    #[error("{span}: variable assignment has an empty name")]
    EmptyVariableName { span: Span },

    #[error("{span}: block has no selector")]
    EmptySelector { span: Span },

    #[error("{span}: unexpected trailing text '{text}'")]
    TrailingText { span: Span, text: String },
}

impl Error {
    /// Source position of a syntax error, if this is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::UnclosedBlock { span }
            | Error::UnexpectedCloseBrace { span }
            | Error::UnterminatedComment { span }
            | Error::MissingColon { span, .. }
            | Error::MissingAssignment { span, .. }
            | Error::EmptyVariableName { span }
            | Error::EmptySelector { span }
            | Error::TrailingText { span, .. } => Some(*span),
            Error::SourceUnavailable { .. }
            | Error::Output { .. }
            | Error::Json(_)
            | Error::Config { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
