//! Flattens nested blocks into a [`RuleTree`].
//!
//! The source is read once, front to back. Characters accumulate into a
//! token until one of `{`, `;` or `}` decides what the token was:
//!
//! - `{` opens a nested block, the token is its selector fragment
//! - `;` ends a declaration (`prop: value`) or a variable assignment
//!   (`$name = value`)
//! - `}` closes the current block
//!
//! Leading whitespace of a token is dropped, inner whitespace is kept as
//! written. `/* ... */` comments are dropped wherever they appear.
//!
//! By default malformed input is handled on a best-effort basis: an
//! unclosed block is closed at the end of input, a declaration without
//! `:` becomes a property with an empty value, and so on. Each such
//! recovery is logged with `tracing::warn!`. With [`Options::strict`] the
//! first one is returned as an [`Error`] instead.

use crate::error::{Error, Result, Span};
use crate::options::Options;
use crate::rules::{RuleTree, Stylesheet};
use crate::scanner::Scanner;
use crate::selector::SelectorStack;
use crate::variables::{VariableStore, MARKER};
use tracing::{debug, trace, warn};

/// Parse `source` into a flattened stylesheet.
///
/// Variable references are substituted after the whole source has been
/// read, so each one resolves to the last value assigned to its name (see
/// [`crate::variables`]).
pub fn parse(source: &str, options: &Options) -> Result<Stylesheet> {
    let mut parser = Parser::new(source, options);
    parser.parse_stylesheet()?;
    Ok(parser.finish())
}

struct Parser<'src> {
    scanner: Scanner<'src>,
    selectors: SelectorStack,
    rules: RuleTree,
    variables: VariableStore,
    strict: bool,
    prune_empty: bool,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, options: &Options) -> Self {
        Self {
            scanner: Scanner::new(source),
            selectors: SelectorStack::new(),
            rules: RuleTree::new(),
            variables: VariableStore::new(),
            strict: options.strict,
            prune_empty: options.prune_empty_selectors,
        }
    }

    /// Next character that belongs to a token, with its position.
    ///
    /// Comments are consumed here. Whitespace is skipped while the token
    /// is still empty.
    fn next_significant(&mut self, token_empty: bool) -> Result<Option<(char, Span)>> {
        loop {
            let at = self.scanner.position();
            let Some(c) = self.scanner.next_char() else {
                return Ok(None);
            };

            if c == '/' && self.scanner.eat('*') {
                if !self.scanner.skip_comment() {
                    if self.strict {
                        return Err(Error::UnterminatedComment { span: at });
                    }
                    warn!(%at, "comment is never closed");
                    return Ok(None);
                }
                continue;
            }

            if token_empty && c.is_whitespace() {
                continue;
            }
            return Ok(Some((c, at)));
        }
    }

    /// Top level: selectors of outermost blocks and variable assignments.
    fn parse_stylesheet(&mut self) -> Result<()> {
        let mut token = String::new();
        let mut start = Span::start();

        while let Some((c, at)) = self.next_significant(token.is_empty())? {
            if token.is_empty() {
                start = at;
            }
            match c {
                '{' => {
                    let selector = token.trim();
                    if selector.is_empty() {
                        self.recover(Error::EmptySelector { span: at })?;
                    }
                    self.selectors.enter_root(selector);
                    self.parse_block(at)?;
                    self.selectors.pop();
                    token.clear();
                }
                ';' if token.contains(MARKER) => {
                    self.assign(&token, start)?;
                    token.clear();
                }
                '}' if self.strict => {
                    return Err(Error::UnexpectedCloseBrace { span: at });
                }
                _ => token.push(c),
            }
        }

        let rest = token.trim();
        if !rest.is_empty() {
            self.recover(Error::TrailingText {
                span: start,
                text: rest.to_string(),
            })?;
        }
        Ok(())
    }

    /// Consumes one block body up to and including its closing `}`.
    ///
    /// The opening `{` has already been consumed and the block's fragment
    /// pushed onto the selector stack.
    fn parse_block(&mut self, open: Span) -> Result<()> {
        self.rules.touch(self.selectors.current());
        trace!(
            selector = self.selectors.current(),
            depth = self.selectors.depth(),
            "enter block"
        );

        let mut token = String::new();
        let mut start = open;
        loop {
            let Some((c, at)) = self.next_significant(token.is_empty())? else {
                self.recover(Error::UnclosedBlock { span: open })?;
                break;
            };
            if token.is_empty() {
                start = at;
            }
            match c {
                '{' => {
                    if token.trim().trim_end_matches(':').trim().is_empty() {
                        self.recover(Error::EmptySelector { span: at })?;
                    }
                    self.selectors.enter_nested(&token);
                    self.parse_block(at)?;
                    self.selectors.pop();
                    token.clear();
                }
                ';' => {
                    self.statement(&token, start)?;
                    token.clear();
                }
                '}' => {
                    let rest = token.trim();
                    if !rest.is_empty() {
                        self.recover(Error::TrailingText {
                            span: start,
                            text: rest.to_string(),
                        })?;
                    }
                    break;
                }
                _ => token.push(c),
            }
        }

        trace!(selector = self.selectors.current(), "leave block");
        Ok(())
    }

    /// A `;`-terminated statement inside a block.
    fn statement(&mut self, text: &str, span: Span) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        if text.contains(MARKER) && text.contains('=') {
            return self.assign(text, span);
        }

        let (property, value) = match text.split_once(':') {
            Some((property, value)) => (property.trim(), value.trim()),
            None => {
                self.recover(Error::MissingColon {
                    span,
                    text: text.to_string(),
                })?;
                (text, "")
            }
        };

        trace!(
            selector = self.selectors.current(),
            property,
            value,
            "declaration"
        );
        self.rules
            .insert(self.selectors.current(), property, value);
        Ok(())
    }

    /// `$name = value`
    fn assign(&mut self, text: &str, span: Span) -> Result<()> {
        let (name, value) = match text.split_once('=') {
            Some((name, value)) => (name.trim(), value.trim()),
            None => {
                self.recover(Error::MissingAssignment {
                    span,
                    text: text.trim().to_string(),
                })?;
                (text.trim(), "")
            }
        };

        if name.trim_start_matches(MARKER).is_empty() {
            return self.recover(Error::EmptyVariableName { span });
        }

        trace!(name, value, "assign variable");
        self.variables.define(name, value);
        Ok(())
    }

    /// Fails with `err` in strict mode, logs it otherwise.
    fn recover(&self, err: Error) -> Result<()> {
        if self.strict {
            return Err(err);
        }
        warn!("recovered from malformed input: {err}");
        Ok(())
    }

    fn finish(mut self) -> Stylesheet {
        self.rules.resolve_values(&self.variables);
        if self.prune_empty {
            let pruned = self.rules.prune_empty();
            debug!(pruned, "pruned empty selectors");
        }
        debug!(
            rules = self.rules.len(),
            variables = self.variables.len(),
            "parsed stylesheet"
        );
        Stylesheet {
            rules: self.rules,
            variables: self.variables,
        }
    }
}
