//! Character source for the parser.

use crate::error::Span;
use std::iter::Peekable;
use std::str::Chars;

/// Walks the source text front to back, one character at a time, with a
/// single character of lookahead.
pub struct Scanner<'src> {
    chars: Peekable<Chars<'src>>,
    line: usize,
    column: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Position of the next character to be returned.
    #[inline]
    pub fn position(&self) -> Span {
        Span {
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Returns the next character, or `None` once the input is exhausted.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next_char();
            true
        } else {
            false
        }
    }

    /// Consumes a comment body up to and including the closing `*/`.
    ///
    /// The opening `/*` must already be consumed. Returns `false` when the
    /// input ends first.
    pub fn skip_comment(&mut self) -> bool {
        while let Some(c) = self.next_char() {
            if c == '*' && self.eat('/') {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_every_character_then_none() {
        let mut scanner = Scanner::new("a{}");
        assert_eq!(scanner.next_char(), Some('a'));
        assert_eq!(scanner.peek(), Some('{'));
        assert_eq!(scanner.next_char(), Some('{'));
        assert_eq!(scanner.next_char(), Some('}'));
        assert_eq!(scanner.next_char(), None);
        assert_eq!(scanner.next_char(), None);
    }

    #[test]
    fn tracks_lines_and_columns() {
        let mut scanner = Scanner::new("ab\ncd");
        scanner.next_char();
        assert_eq!(scanner.position(), Span { line: 1, column: 2 });
        scanner.next_char();
        scanner.next_char();
        assert_eq!(scanner.position(), Span { line: 2, column: 1 });
    }

    #[test]
    fn skips_comment_bodies() {
        let mut scanner = Scanner::new(" a ** b */x");
        assert!(scanner.skip_comment());
        assert_eq!(scanner.next_char(), Some('x'));

        let mut scanner = Scanner::new("never closed *");
        assert!(!scanner.skip_comment());
        assert_eq!(scanner.next_char(), None);
    }
}
