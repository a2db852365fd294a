//! Token types for the path-data scanner.
//!
//! The scanner produces two kinds of tokens:
//! - **Letter**: a single command letter from the fixed alphabet
//!   `MmLlHhVvCcSsQqTtAaZz`
//! - **Number**: a signed decimal constant, optionally with an exponent
//!
//! Whether a letter is implemented, and how many numbers it consumes, is
//! decided later by the parser, not at the scanner level.

use crate::types::Scalar;

// ---------------------------------------------------------------------------
// Source location
// ---------------------------------------------------------------------------

/// A byte-offset span in the source input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-length span at the given position.
    #[must_use]
    pub const fn at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A lexical token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// The kind and value of the token.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

/// The kind and payload of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A command letter from the path alphabet.
    ///
    /// Always one of `MmLlHhVvCcSsQqTtAaZz`; anything else alphabetic is
    /// skipped by the scanner before a token is produced.
    Letter(u8),

    /// A signed decimal number, e.g. `42`, `-3.5`, `.25`, `1e-3`.
    Number(Scalar),

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` if this is the given command letter.
    #[must_use]
    pub fn is_letter(&self, letter: u8) -> bool {
        matches!(self, Self::Letter(c) if *c == letter)
    }

    /// Returns `true` if this is a number token.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` if this is end-of-input.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
