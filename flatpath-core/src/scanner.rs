//! Lexical scanner for SVG path data.
//!
//! Splits the contents of a `d` attribute into command letters and signed
//! decimal numbers. Whitespace and commas separate tokens and are
//! discarded; any byte that fits neither pattern is skipped and recorded
//! as a non-fatal diagnostic.
//!
//! # Token production rules
//!
//! | Input                          | Token produced                  |
//! |--------------------------------|---------------------------------|
//! | `M`, `z`                       | `Letter(b'M')`, `Letter(b'z')`  |
//! | `42`, `-3.5`, `.25`, `1e-3`    | `Number(value)`                 |
//! | spaces, tabs, newlines, commas | (separator, skipped)            |
//! | `x`, lone `.`, lone `-`        | (skipped, diagnostic recorded)  |
//! | end of input                   | `Eof`                           |
//!
//! Number syntax quirks worth knowing, all inherited from how icon path
//! data is written in the wild:
//! - a sign binds to the following number, so `5-3` is two tokens
//! - at most one decimal point per number, so `1.2.3` is `1.2` then `.3`
//! - a trailing dot is part of the number (`1.` is `1.0`)
//! - `e`/`E` starts an exponent only when digits follow; otherwise the
//!   letter is skipped on its own

use crate::error::{ParseError, ParseErrorKind};
use crate::token::{Span, Token, TokenKind};
use crate::types::Scalar;

/// The command alphabet.
///
/// Unimplemented letters (`Q`, `T`, `A` forms) still scan as letter tokens
/// so the parser can attribute their arguments correctly before dropping
/// them.
pub(crate) const fn is_command_letter(c: u8) -> bool {
    matches!(
        c,
        b'M' | b'm'
            | b'L'
            | b'l'
            | b'H'
            | b'h'
            | b'V'
            | b'v'
            | b'C'
            | b'c'
            | b'S'
            | b's'
            | b'Q'
            | b'q'
            | b'T'
            | b't'
            | b'A'
            | b'a'
            | b'Z'
            | b'z'
    )
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Lexical scanner for path data.
pub struct Scanner {
    /// Source bytes (owned).
    src: Vec<u8>,
    /// Current byte position.
    pos: usize,
    /// Accumulated diagnostics (non-fatal).
    errors: Vec<ParseError>,
}

impl Scanner {
    /// Create a new scanner over the given path data.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            src: source.as_bytes().to_vec(),
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_separators();

            if self.pos >= self.src.len() {
                return Token {
                    kind: TokenKind::Eof,
                    span: Span::at(self.pos),
                };
            }

            let start = self.pos;
            let c = self.src[self.pos];

            if is_command_letter(c) {
                self.pos += 1;
                return Token {
                    kind: TokenKind::Letter(c),
                    span: Span::new(start, self.pos),
                };
            }

            if c.is_ascii_digit() || (c == b'.' && self.digit_at(self.pos + 1)) {
                return self.scan_number(start);
            }

            if matches!(c, b'+' | b'-') && self.number_starts_at(self.pos + 1) {
                return self.scan_number(start);
            }

            // Anything else: letters outside the alphabet, signs and dots
            // that do not start a number, stray punctuation.
            self.pos += 1;
            let message = if c.is_ascii_graphic() {
                format!("invalid character '{}'", c as char)
            } else {
                format!("invalid character: {c:#04x}")
            };
            self.errors.push(ParseError {
                kind: ParseErrorKind::InvalidCharacter,
                message,
                span: Span::new(start, self.pos),
            });
        }
    }

    /// Scan all remaining tokens (including `Eof`).
    #[cfg(test)]
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.kind.is_eof();
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Return accumulated diagnostics.
    #[cfg(test)]
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Drain accumulated diagnostics.
    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }

    // -- internal helpers --

    /// Skip whitespace and commas.
    fn skip_separators(&mut self) {
        while self.pos < self.src.len() {
            match self.src[self.pos] {
                b' ' | b'\t' | b'\r' | b'\n' | 0x0C | b',' => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Whether the byte at `pos` is an ASCII digit.
    fn digit_at(&self, pos: usize) -> bool {
        pos < self.src.len() && self.src[pos].is_ascii_digit()
    }

    /// Whether a number body (a digit, or a dot followed by a digit)
    /// starts at `pos`.
    fn number_starts_at(&self, pos: usize) -> bool {
        self.digit_at(pos)
            || (pos < self.src.len() && self.src[pos] == b'.' && self.digit_at(pos + 1))
    }

    /// Scan a numeric token starting at `start`.
    ///
    /// Called when the input at `start` is a digit, a dot followed by a
    /// digit, or a sign followed by either of those.
    fn scan_number(&mut self, start: usize) -> Token {
        // Optional sign
        if matches!(self.src[self.pos], b'+' | b'-') {
            self.pos += 1;
        }

        // Integer part
        let mut saw_digits = false;
        while self.digit_at(self.pos) {
            self.pos += 1;
            saw_digits = true;
        }

        // Fractional part: with integer digits present the dot is consumed
        // even when nothing follows it ("1." is a valid number); without
        // them a digit must follow (".5").
        if self.pos < self.src.len()
            && self.src[self.pos] == b'.'
            && (saw_digits || self.digit_at(self.pos + 1))
        {
            self.pos += 1;
            while self.digit_at(self.pos) {
                self.pos += 1;
            }
        }

        // Exponent: consumed only when digits follow the marker (and the
        // optional exponent sign). A bare "1e" leaves the 'e' behind.
        if self.pos < self.src.len() && matches!(self.src[self.pos], b'e' | b'E') {
            let mut after = self.pos + 1;
            if after < self.src.len() && matches!(self.src[after], b'+' | b'-') {
                after += 1;
            }
            if self.digit_at(after) {
                self.pos = after;
                while self.digit_at(self.pos) {
                    self.pos += 1;
                }
            }
        }

        let text = &self.src[start..self.pos];
        // The scanned range is ASCII by construction.
        let s = std::str::from_utf8(text).unwrap_or("0");
        let value = s.parse::<Scalar>().unwrap_or(0.0);

        Token {
            kind: TokenKind::Number(value),
            span: Span::new(start, self.pos),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Vec<Token> {
        Scanner::new(input).scan_all()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        scan(input).into_iter().map(|t| t.kind).collect()
    }

    // -- separators --

    #[test]
    fn empty_input() {
        let tokens = kinds("");
        assert_eq!(tokens, vec![TokenKind::Eof]);
    }

    #[test]
    fn separators_only() {
        let tokens = kinds("  \t\n , ,, ");
        assert_eq!(tokens, vec![TokenKind::Eof]);
    }

    #[test]
    fn commas_split_numbers() {
        let tokens = kinds("1,2");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(1.0),
                TokenKind::Number(2.0),
                TokenKind::Eof,
            ]
        );
    }

    // -- command letters --

    #[test]
    fn single_letters() {
        let tokens = kinds("M z");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Letter(b'M'),
                TokenKind::Letter(b'z'),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unimplemented_letters_still_scan() {
        // Q/T/A are dropped later by the parser, not by the scanner
        let tokens = kinds("QtA");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Letter(b'Q'),
                TokenKind::Letter(b't'),
                TokenKind::Letter(b'A'),
                TokenKind::Eof,
            ]
        );
    }

    // -- numbers --

    #[test]
    fn integer() {
        let tokens = kinds("42");
        assert_eq!(tokens, vec![TokenKind::Number(42.0), TokenKind::Eof]);
    }

    #[test]
    fn decimal() {
        let tokens = kinds("3.14");
        assert_eq!(tokens, vec![TokenKind::Number(3.14), TokenKind::Eof]);
    }

    #[test]
    fn leading_dot_number() {
        let tokens = kinds(".5");
        assert_eq!(tokens, vec![TokenKind::Number(0.5), TokenKind::Eof]);
    }

    #[test]
    fn trailing_dot_number() {
        let tokens = kinds("1.");
        assert_eq!(tokens, vec![TokenKind::Number(1.0), TokenKind::Eof]);
    }

    #[test]
    fn signed_numbers() {
        let tokens = kinds("+5 -3.5 -.25");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(5.0),
                TokenKind::Number(-3.5),
                TokenKind::Number(-0.25),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn sign_starts_a_new_number() {
        // No separator needed: compact icon data writes "5-3" for 5, -3
        let tokens = kinds("5-3");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(5.0),
                TokenKind::Number(-3.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn number_dot_number() {
        // "1.2.3" → 1.2 then .3 (at most one dot per number)
        let tokens = kinds("1.2.3");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(1.2),
                TokenKind::Number(0.3),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn exponents() {
        let tokens = kinds("1e3 2E-2 1.5e+2");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Number(1000.0),
                TokenKind::Number(0.02),
                TokenKind::Number(150.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn bare_exponent_marker_left_behind() {
        let mut scanner = Scanner::new("1e");
        let tokens = scanner.scan_all();
        assert_eq!(tokens[0].kind, TokenKind::Number(1.0));
        assert_eq!(scanner.errors().len(), 1);
        assert_eq!(scanner.errors()[0].kind, ParseErrorKind::InvalidCharacter);
    }

    // -- skipped input --

    #[test]
    fn unknown_letter_recorded() {
        let mut scanner = Scanner::new("x");
        let tokens = scanner.scan_all();
        assert_eq!(
            tokens,
            vec![Token {
                kind: TokenKind::Eof,
                span: Span::at(1),
            }]
        );
        assert_eq!(scanner.errors().len(), 1);
        assert_eq!(scanner.errors()[0].kind, ParseErrorKind::InvalidCharacter);
        assert_eq!(scanner.errors()[0].span, Span::new(0, 1));
    }

    #[test]
    fn lone_signs_and_dots_recorded() {
        let mut scanner = Scanner::new("- . +");
        let tokens = scanner.scan_all();
        assert_eq!(tokens.len(), 1); // Eof only
        assert_eq!(scanner.errors().len(), 3);
    }

    #[test]
    fn scanning_continues_past_skipped_bytes() {
        let mut scanner = Scanner::new("M # 5");
        let tokens = scanner.scan_all();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Letter(b'M'),
                TokenKind::Number(5.0),
                TokenKind::Eof,
            ]
        );
        assert_eq!(scanner.errors().len(), 1);
    }

    // -- adjacency --

    #[test]
    fn letter_glued_to_numbers() {
        let tokens = kinds("M1.5.5");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Letter(b'M'),
                TokenKind::Number(1.5),
                TokenKind::Number(0.5),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn realistic_fragment() {
        let tokens = kinds("M144 144l0 48c0-44.2-35.8-80-80-80");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Letter(b'M'),
                TokenKind::Number(144.0),
                TokenKind::Number(144.0),
                TokenKind::Letter(b'l'),
                TokenKind::Number(0.0),
                TokenKind::Number(48.0),
                TokenKind::Letter(b'c'),
                TokenKind::Number(0.0),
                TokenKind::Number(-44.2),
                TokenKind::Number(-35.8),
                TokenKind::Number(-80.0),
                TokenKind::Number(-80.0),
                TokenKind::Number(-80.0),
                TokenKind::Eof,
            ]
        );
    }

    // -- span tracking --

    #[test]
    fn spans_are_correct() {
        let tokens = scan("M 10.5");
        assert_eq!(tokens[0].span, Span::new(0, 1)); // "M"
        assert_eq!(tokens[1].span, Span::new(2, 6)); // "10.5"
    }
}
