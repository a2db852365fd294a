//! Path-data parser: tokens to typed commands.
//!
//! Grouping rule: after a command letter, every following number belongs
//! to that command until the next letter or the end of input. The flat
//! number list is then cut into the letter's fixed-size argument groups
//! (2 for `M`/`L`, 1 for `H`/`V`, 6 for `C`, 4 for `S`, 0 for `Z`).
//!
//! The parser is lenient, matching how hand-authored icon data has always
//! been treated:
//! - trailing numbers that do not fill a complete group are dropped
//! - letters outside the alphabet never reach the parser (the scanner
//!   skips them), so numbers that follow attach to the previous command
//! - `Q`/`T`/`A` commands are recognized but dropped with their arguments
//!
//! Every such event is recorded as a [`ParseError`] diagnostic instead of
//! failing the parse. [`parse_strict`] upgrades the first diagnostic to a
//! hard error for pipelines that want pristine input.

use crate::command::{CurveArgs, PathCommand, SmoothArgs};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::scanner::Scanner;
use crate::token::{Span, TokenKind};
use crate::types::{Point, Scalar};

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse path data into typed commands, accumulating diagnostics.
///
/// Never fails: malformed input degrades to dropped numbers or dropped
/// commands, each recorded in the returned diagnostic list in source
/// order.
#[must_use]
pub fn parse(source: &str) -> (Vec<PathCommand>, Vec<ParseError>) {
    let mut scanner = Scanner::new(source);
    let mut commands = Vec::new();
    let mut errors = Vec::new();
    let mut pending: Option<Pending> = None;

    loop {
        let token = scanner.next_token();
        errors.extend(scanner.take_errors());

        match token.kind {
            TokenKind::Letter(letter) => {
                if let Some(p) = pending.take() {
                    p.finish(&mut commands, &mut errors);
                }
                pending = Some(Pending {
                    letter,
                    span: token.span,
                    args: Vec::new(),
                });
            }
            TokenKind::Number(value) => match pending.as_mut() {
                Some(p) => p.args.push(value),
                None => errors.push(ParseError {
                    kind: ParseErrorKind::StrayNumber,
                    message: format!("number {value} before any command"),
                    span: token.span,
                }),
            },
            TokenKind::Eof => {
                if let Some(p) = pending.take() {
                    p.finish(&mut commands, &mut errors);
                }
                return (commands, errors);
            }
        }
    }
}

/// Parse path data, failing on the first diagnostic.
///
/// # Errors
///
/// Returns the first [`ParseError`] the lenient parse would have
/// accumulated.
pub fn parse_strict(source: &str) -> ParseResult<Vec<PathCommand>> {
    let (commands, mut errors) = parse(source);
    if errors.is_empty() {
        Ok(commands)
    } else {
        Err(errors.remove(0))
    }
}

// ---------------------------------------------------------------------------
// Command assembly
// ---------------------------------------------------------------------------

/// A command letter waiting for its argument run to end.
struct Pending {
    letter: u8,
    span: Span,
    args: Vec<Scalar>,
}

impl Pending {
    /// Cut the collected arguments into groups and emit the command.
    fn finish(self, commands: &mut Vec<PathCommand>, errors: &mut Vec<ParseError>) {
        let relative = self.letter.is_ascii_lowercase();
        let command = match self.letter {
            b'M' | b'm' => self
                .pair_groups(errors)
                .map(|points| PathCommand::MoveTo { relative, points }),
            b'L' | b'l' => self
                .pair_groups(errors)
                .map(|points| PathCommand::LineTo { relative, points }),
            b'H' | b'h' => self
                .scalar_groups(errors)
                .map(|coords| PathCommand::HorizontalTo { relative, coords }),
            b'V' | b'v' => self
                .scalar_groups(errors)
                .map(|coords| PathCommand::VerticalTo { relative, coords }),
            b'C' | b'c' => self
                .curve_groups(errors)
                .map(|curves| PathCommand::CurveTo { relative, curves }),
            b'S' | b's' => self
                .smooth_groups(errors)
                .map(|curves| PathCommand::SmoothTo { relative, curves }),
            b'Z' | b'z' => {
                if !self.args.is_empty() {
                    errors.push(self.trailing(self.args.len()));
                }
                Some(PathCommand::Close)
            }
            b'Q' | b'q' | b'T' | b't' | b'A' | b'a' => {
                errors.push(ParseError {
                    kind: ParseErrorKind::UnsupportedCommand,
                    message: format!(
                        "unsupported command '{}' dropped with {} arguments",
                        self.letter as char,
                        self.args.len()
                    ),
                    span: self.span,
                });
                None
            }
            // The scanner only emits letters from the alphabet.
            _ => None,
        };
        if let Some(command) = command {
            commands.push(command);
        }
    }

    /// Groups of two: coordinate pairs for `M`/`L`.
    fn pair_groups(&self, errors: &mut Vec<ParseError>) -> Option<Vec<Point>> {
        let chunks = self.args.chunks_exact(2);
        let leftover = chunks.remainder().len();
        let points: Vec<Point> = chunks.map(|c| Point::new(c[0], c[1])).collect();
        self.check_groups(points, leftover, errors)
    }

    /// Groups of one: single coordinates for `H`/`V`.
    fn scalar_groups(&self, errors: &mut Vec<ParseError>) -> Option<Vec<Scalar>> {
        if self.args.is_empty() {
            errors.push(self.missing());
            None
        } else {
            Some(self.args.clone())
        }
    }

    /// Groups of six: two control points and an endpoint for `C`.
    fn curve_groups(&self, errors: &mut Vec<ParseError>) -> Option<Vec<CurveArgs>> {
        let chunks = self.args.chunks_exact(6);
        let leftover = chunks.remainder().len();
        let curves: Vec<CurveArgs> = chunks
            .map(|c| CurveArgs {
                ctrl1: Point::new(c[0], c[1]),
                ctrl2: Point::new(c[2], c[3]),
                to: Point::new(c[4], c[5]),
            })
            .collect();
        self.check_groups(curves, leftover, errors)
    }

    /// Groups of four: second control point and endpoint for `S`.
    fn smooth_groups(&self, errors: &mut Vec<ParseError>) -> Option<Vec<SmoothArgs>> {
        let chunks = self.args.chunks_exact(4);
        let leftover = chunks.remainder().len();
        let curves: Vec<SmoothArgs> = chunks
            .map(|c| SmoothArgs {
                ctrl2: Point::new(c[0], c[1]),
                to: Point::new(c[2], c[3]),
            })
            .collect();
        self.check_groups(curves, leftover, errors)
    }

    /// Shared tail of group cutting: no groups at all drops the command
    /// with a single diagnostic; a partial trailing group is reported but
    /// the complete groups are kept.
    fn check_groups<T>(
        &self,
        groups: Vec<T>,
        leftover: usize,
        errors: &mut Vec<ParseError>,
    ) -> Option<Vec<T>> {
        if groups.is_empty() {
            errors.push(self.missing());
            return None;
        }
        if leftover > 0 {
            errors.push(self.trailing(leftover));
        }
        Some(groups)
    }

    fn missing(&self) -> ParseError {
        ParseError {
            kind: ParseErrorKind::MissingArguments,
            message: format!(
                "command '{}' has no complete argument group",
                self.letter as char
            ),
            span: self.span,
        }
    }

    fn trailing(&self, count: usize) -> ParseError {
        ParseError {
            kind: ParseErrorKind::TrailingArguments,
            message: format!(
                "command '{}': dropped {count} trailing arguments",
                self.letter as char
            ),
            span: self.span,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
