//! Error and diagnostic types.
//!
//! Parsing is lenient: malformed input produces [`ParseError`] diagnostics
//! that accumulate while the parser keeps going, matching how hand-authored
//! icon paths are treated in practice. [`crate::parser::parse_strict`]
//! upgrades the first diagnostic to a hard error. Geometry validation
//! (view-box construction) fails eagerly with [`GeometryError`].

use std::fmt;

use crate::token::Span;
use crate::types::Scalar;

// ---------------------------------------------------------------------------
// Parse diagnostics
// ---------------------------------------------------------------------------

/// Machine-readable category of a parse diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A byte that is neither a command letter, part of a number, nor a
    /// separator. The byte is skipped.
    InvalidCharacter,
    /// A number that appears before the first command letter. The number
    /// is dropped.
    StrayNumber,
    /// A recognized command letter with no implementation (`Q`, `T`, `A`
    /// and their relative forms). The command and its numbers are dropped.
    UnsupportedCommand,
    /// A command letter with too few numbers to fill even one argument
    /// group. The command is dropped.
    MissingArguments,
    /// Trailing numbers that do not fill a complete argument group. The
    /// leftovers are dropped; complete groups are kept.
    TrailingArguments,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidCharacter => "invalid character",
            Self::StrayNumber => "stray number",
            Self::UnsupportedCommand => "unsupported command",
            Self::MissingArguments => "missing arguments",
            Self::TrailingArguments => "trailing arguments",
        };
        f.write_str(name)
    }
}

/// A diagnostic produced while parsing path data.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Machine-readable diagnostic kind.
    pub kind: ParseErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending input.
    pub span: Span,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at {}-{}: {}",
            self.span.start, self.span.end, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Result alias for strict parsing.
pub type ParseResult<T> = Result<T, ParseError>;

// ---------------------------------------------------------------------------
// Geometry errors
// ---------------------------------------------------------------------------

/// An error in the geometric reference frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A view box whose dimensions cannot be used as divisors.
    InvalidViewBox {
        /// Offending width.
        width: Scalar,
        /// Offending height.
        height: Scalar,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewBox { width, height } => write!(
                f,
                "invalid view box {width}x{height}: dimensions must be finite and positive"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
