//! Typed path commands.
//!
//! Each variant models one letter pair of the path grammar, with its
//! arguments already cut into fixed-size groups (pairs for `M`/`L`, single
//! coordinates for `H`/`V`, control-point triples for `C`, pairs of points
//! for `S`). Repetition within one command is explicit in the payload
//! vector, so downstream code never touches a flat number list.

use crate::types::{Point, Scalar};

/// Control points and endpoint of one `C`/`c` argument group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveArgs {
    /// First control point.
    pub ctrl1: Point,
    /// Second control point. Remembered across commands for smooth-curve
    /// reflection.
    pub ctrl2: Point,
    /// Endpoint; the pen lands here.
    pub to: Point,
}

/// Second control point and endpoint of one `S`/`s` argument group.
///
/// The first control point is not part of the input; the interpreter
/// derives it by reflecting the previous curve's second control point
/// through the current pen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothArgs {
    /// Second control point.
    pub ctrl2: Point,
    /// Endpoint.
    pub to: Point,
}

/// One parsed path command.
///
/// `relative` is set for lowercase command letters; coordinates are then
/// offsets from the pen position at the point each argument group is
/// applied, not from the position at the command letter.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// `M`/`m`. The first pair starts a new subpath; any further pairs
    /// are implicit line segments within it.
    MoveTo { relative: bool, points: Vec<Point> },
    /// `L`/`l`.
    LineTo { relative: bool, points: Vec<Point> },
    /// `H`/`h`. One x coordinate (or delta) per group; y is carried.
    HorizontalTo { relative: bool, coords: Vec<Scalar> },
    /// `V`/`v`. One y coordinate (or delta) per group; x is carried.
    VerticalTo { relative: bool, coords: Vec<Scalar> },
    /// `C`/`c`.
    CurveTo {
        relative: bool,
        curves: Vec<CurveArgs>,
    },
    /// `S`/`s`.
    SmoothTo {
        relative: bool,
        curves: Vec<SmoothArgs>,
    },
    /// `Z`/`z`. Closes the current subpath back to its start point.
    Close,
}
