//! Nested CSS with variables, flattened to plain CSS.
//!
//! ```css
//! $accent = #0FF;
//!
//! #container {
//!     color: #F00;
//!     .subClass { color: #00F; }
//!     > p {
//!         color: #0F0;
//!         :hover: { color: $accent; }
//!     }
//! }
//! ```
//!
//! becomes
//!
//! ```css
//! #container { color: #F00; }
//! #container .subClass { color: #00F; }
//! #container > p { color: #0F0; }
//! #container > p:hover { color: #0FF; }
//! ```
//!
//! Variables live in one global table; see [`variables`] for how
//! references are resolved.

pub mod emitter;
pub mod error;
pub mod loader;
pub mod options;
pub mod parser;
pub mod rules;
pub mod scanner;
pub mod selector;
pub mod variables;

pub use emitter::emit_css;
pub use error::{Error, Result, Span};
pub use loader::{load_source, parse_file};
pub use options::Options;
pub use parser::parse;
pub use rules::{Declarations, RuleTree, Stylesheet};
pub use variables::VariableStore;

/// Parse `source` and render it back as CSS.
pub fn compile(source: &str, options: &Options) -> Result<String> {
    let stylesheet = parse(source, options)?;
    Ok(emit_css(&stylesheet.rules, options))
}
