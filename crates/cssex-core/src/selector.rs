//! The selector currently in scope while parsing nested blocks.

/// How a fragment attaches to the selector of its parent block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Top-level selector, nothing to attach to.
    Root,
    /// Descendant or explicit combinator: `parent fragment`.
    Descendant,
    /// Pseudo-selector: `parent:fragment`, no space.
    Pseudo,
}

#[derive(Debug, Clone)]
struct Frame {
    join: Join,
    /// Length of the resolved path before this frame was pushed.
    parent_len: usize,
}

/// Stack of selector fragments, one per open block.
///
/// The resolved path is kept alongside the frames so reading it is free;
/// popping truncates back to the exact length recorded on push, so a
/// fragment may contain spaces or colons of its own.
#[derive(Debug, Default)]
pub struct SelectorStack {
    path: String,
    frames: Vec<Frame>,
}

impl SelectorStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fully resolved selector of the innermost open block.
    pub fn current(&self) -> &str {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Classifies a nested block header and pushes it.
    ///
    /// A header written as `:hover:` loses its trailing colon. Headers
    /// starting with `:` attach without a space, everything else
    /// (including `> p` and `+ li`) attaches after a single space.
    pub fn enter_nested(&mut self, header: &str) -> Join {
        let fragment = header.trim();
        let fragment = fragment.strip_suffix(':').unwrap_or(fragment).trim_end();
        let join = if fragment.starts_with(':') {
            Join::Pseudo
        } else {
            Join::Descendant
        };
        self.push(fragment, join);
        join
    }

    /// Pushes a top-level selector.
    pub fn enter_root(&mut self, selector: &str) {
        self.push(selector.trim(), Join::Root);
    }

    fn push(&mut self, fragment: &str, join: Join) {
        let parent_len = self.path.len();
        if join == Join::Descendant && !self.path.is_empty() && !fragment.is_empty() {
            self.path.push(' ');
        }
        self.path.push_str(fragment);
        self.frames.push(Frame { join, parent_len });
    }

    /// Drops the innermost fragment, restoring the parent's selector.
    pub fn pop(&mut self) -> Option<Join> {
        let frame = self.frames.pop()?;
        self.path.truncate(frame.parent_len);
        Some(frame.join)
    }
}
