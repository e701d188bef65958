//! Stylesheet variables.
//!
//! Variables are assigned with `$name = value;` and referenced inside a
//! declaration value as `$name`:
//!
//! ```css
//! $theme = #F00;
//!
//! h1 { color: $theme; }
//! p { border: 1px solid $theme; }
//! ```
//!
//! ## Scoping
//!
//! There is a single table per parse. An assignment nested inside a block
//! is visible everywhere, not just inside that block, and a later
//! assignment to the same name replaces the earlier one. References are
//! substituted after the whole source has been read, so every reference
//! sees the last value assigned to its name, wherever it appears.
//!
//! ## References
//!
//! A reference is `$` followed by one or more identifier characters
//! (`A-Z`, `a-z`, `0-9`, `_`, `-`). A reference to a name that was never
//! assigned stays in the output as written, as does a `$` that is not
//! followed by an identifier character. Substitution is single-level: the
//! replacement text is not itself scanned for references.

use indexmap::IndexMap;
use serde::Serialize;

/// Marker that starts a variable name.
pub const MARKER: char = '$';

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct VariableStore {
    variables: IndexMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `name -> value`, replacing any earlier value.
    ///
    /// A leading `$` on `name` is ignored, so `define("$a", ..)` and
    /// `define("a", ..)` assign the same variable.
    pub fn define(&mut self, name: &str, value: &str) {
        let name = name.strip_prefix(MARKER).unwrap_or(name);
        self.variables.insert(name.to_string(), value.to_string());
    }

    /// The current value of `name` (without the `$`), if assigned.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Replaces every reference to a known variable in `text`.
    pub fn resolve(&self, text: &str) -> String {
        if !text.contains(MARKER) {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(idx) = rest.find(MARKER) {
            out.push_str(&rest[..idx]);
            let after = &rest[idx + MARKER.len_utf8()..];
            let name_len = after
                .find(|c: char| !is_name_char(c))
                .unwrap_or(after.len());
            let name = &after[..name_len];

            match self.get(name) {
                Some(value) if !name.is_empty() => out.push_str(value),
                _ => {
                    out.push(MARKER);
                    out.push_str(name);
                }
            }
            rest = &after[name_len..];
        }
        out.push_str(rest);
        out
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
