//! The path interpreter: typed commands to flattened polygon outlines.
//!
//! A [`Flattener`] owns the pen state for one pass over a command
//! sequence:
//! - the cursor (current pen position)
//! - the current subpath's start point, where `Z`/`z` returns the pen
//! - the previous curve's second control point, reflected by `S`/`s`
//! - the polygon being accumulated, plus the finished ones
//!
//! Feed commands with [`Flattener::apply`] and take the finished outlines
//! with [`Flattener::finish`]. Curves become runs of straight segments;
//! everything else appends vertices directly.

use crate::bezier::CubicSegment;
use crate::command::{CurveArgs, PathCommand, SmoothArgs};
use crate::types::{Point, Polygon, Scalar};

/// Default number of straight segments per cubic curve.
///
/// A fixed quality/size tradeoff for icon-scale artwork; override with
/// [`Flattener::with_curve_steps`].
pub const DEFAULT_CURVE_STEPS: usize = 16;

/// Flatten a full command sequence with [`DEFAULT_CURVE_STEPS`].
#[must_use]
pub fn flatten_commands(commands: &[PathCommand]) -> Vec<Polygon> {
    let mut flattener = Flattener::new();
    for command in commands {
        flattener.apply(command);
    }
    flattener.finish()
}

// ---------------------------------------------------------------------------
// Flattener
// ---------------------------------------------------------------------------

/// Interpreter state for one pass over a command sequence.
#[derive(Debug)]
pub struct Flattener {
    /// Current pen position.
    cursor: Point,
    /// Start of the current subpath; `Z`/`z` returns the pen here.
    subpath_start: Point,
    /// Second control point of the previous curve group, in absolute
    /// coordinates. `Some` only while the previous command was `C`/`S`;
    /// smooth curves reflect it through the cursor.
    last_control: Option<Point>,
    /// Vertices of the polygon being built.
    current: Vec<Point>,
    /// Completed outlines.
    finished: Vec<Polygon>,
    /// Straight segments per cubic curve.
    curve_steps: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new()
    }
}

impl Flattener {
    /// Create a flattener with [`DEFAULT_CURVE_STEPS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_curve_steps(DEFAULT_CURVE_STEPS)
    }

    /// Create a flattener with a custom subdivision count.
    ///
    /// A count of zero is treated as one: every curve contributes at
    /// least its endpoint.
    #[must_use]
    pub fn with_curve_steps(steps: usize) -> Self {
        Self {
            cursor: Point::ZERO,
            subpath_start: Point::ZERO,
            last_control: None,
            current: Vec::new(),
            finished: Vec::new(),
            curve_steps: steps.max(1),
        }
    }

    /// Interpret one command, updating pen state and output.
    pub fn apply(&mut self, command: &PathCommand) {
        match command {
            PathCommand::MoveTo { relative, points } => self.move_to(points, *relative),
            PathCommand::LineTo { relative, points } => self.line_to(points, *relative),
            PathCommand::HorizontalTo { relative, coords } => {
                self.horizontal_to(coords, *relative);
            }
            PathCommand::VerticalTo { relative, coords } => self.vertical_to(coords, *relative),
            PathCommand::CurveTo { relative, curves } => self.curve_to(curves, *relative),
            PathCommand::SmoothTo { relative, curves } => self.smooth_to(curves, *relative),
            PathCommand::Close => self.close(),
        }
    }

    /// Flush the in-progress polygon (if any) and return the outlines.
    #[must_use]
    pub fn finish(mut self) -> Vec<Polygon> {
        self.flush();
        self.finished
    }

    // -- command handlers --

    fn move_to(&mut self, points: &[Point], relative: bool) {
        self.flush();
        let mut points = points.iter();
        if let Some(&first) = points.next() {
            self.cursor = self.resolve(first, relative);
            self.subpath_start = self.cursor;
            self.current.push(self.cursor);
        }
        // Any further pairs are implicit line segments in the new subpath.
        for &p in points {
            self.cursor = self.resolve(p, relative);
            self.current.push(self.cursor);
        }
        self.last_control = None;
    }

    fn line_to(&mut self, points: &[Point], relative: bool) {
        for &p in points {
            self.cursor = self.resolve(p, relative);
            self.current.push(self.cursor);
        }
        self.last_control = None;
    }

    fn horizontal_to(&mut self, coords: &[Scalar], relative: bool) {
        for &x in coords {
            self.cursor.x = if relative { self.cursor.x + x } else { x };
            self.current.push(self.cursor);
        }
        self.last_control = None;
    }

    fn vertical_to(&mut self, coords: &[Scalar], relative: bool) {
        for &y in coords {
            self.cursor.y = if relative { self.cursor.y + y } else { y };
            self.current.push(self.cursor);
        }
        self.last_control = None;
    }

    fn curve_to(&mut self, curves: &[CurveArgs], relative: bool) {
        for group in curves {
            let ctrl1 = self.resolve(group.ctrl1, relative);
            let ctrl2 = self.resolve(group.ctrl2, relative);
            let to = self.resolve(group.to, relative);
            self.add_curve(ctrl1, ctrl2, to);
        }
    }

    fn smooth_to(&mut self, curves: &[SmoothArgs], relative: bool) {
        for group in curves {
            let ctrl1 = match self.last_control {
                // Reflect the previous second control point through the pen
                Some(control) => self.cursor + (self.cursor - control),
                None => self.cursor,
            };
            let ctrl2 = self.resolve(group.ctrl2, relative);
            let to = self.resolve(group.to, relative);
            self.add_curve(ctrl1, ctrl2, to);
        }
    }

    fn close(&mut self) {
        self.cursor = self.subpath_start;
        if !self.current.is_empty() {
            // The start point is appended unconditionally, so a closed
            // outline always repeats its first vertex at the end.
            self.current.push(self.subpath_start);
            self.flush();
        }
        self.last_control = None;
    }

    // -- internal helpers --

    /// Resolve a raw coordinate pair against the pen position.
    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative {
            self.cursor + p.to_vec2()
        } else {
            p
        }
    }

    /// Flatten one cubic from the pen position and advance to its endpoint.
    fn add_curve(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let segment = CubicSegment::new(self.cursor, ctrl1, ctrl2, to);
        segment.flatten_into(&mut self.current, self.curve_steps);
        self.cursor = to;
        self.last_control = Some(ctrl2);
    }

    /// Move the in-progress polygon, if it has any vertices, to the
    /// finished list.
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.finished.push(Polygon::new(std::mem::take(&mut self.current)));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn flatten(source: &str) -> Vec<Polygon> {
        let (commands, errors) = parse(source);
        assert!(errors.is_empty(), "unexpected diagnostics: {errors:?}");
        flatten_commands(&commands)
    }

    fn points_of(polygons: &[Polygon], index: usize) -> &[Point] {
        &polygons[index].points
    }

    // -- straight-line commands --

    #[test]
    fn closed_triangle() {
        let polygons = flatten("M0 0 L10 0 L10 10 Z");
        assert_eq!(polygons.len(), 1);
        assert_eq!(
            points_of(&polygons, 0),
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 0.0),
            ]
        );
        assert!(polygons[0].is_closed());
    }

    #[test]
    fn moveto_extra_pairs_are_line_segments() {
        let polygons = flatten("M0 0 10 0 10 10");
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 3);
        assert_eq!(points_of(&polygons, 0)[2], Point::new(10.0, 10.0));
    }

    #[test]
    fn relative_lines_accumulate() {
        let polygons = flatten("m1 1l2 0 0 2");
        assert_eq!(
            points_of(&polygons, 0),
            &[
                Point::new(1.0, 1.0),
                Point::new(3.0, 1.0),
                Point::new(3.0, 3.0),
            ]
        );
    }

    #[test]
    fn axis_commands_carry_the_other_coordinate() {
        let polygons = flatten("M1 1H4 6V5");
        assert_eq!(
            points_of(&polygons, 0),
            &[
                Point::new(1.0, 1.0),
                Point::new(4.0, 1.0),
                Point::new(6.0, 1.0),
                Point::new(6.0, 5.0),
            ]
        );
    }

    #[test]
    fn relative_axis_commands_accumulate() {
        let polygons = flatten("M1 1h2 3v1");
        assert_eq!(
            points_of(&polygons, 0),
            &[
                Point::new(1.0, 1.0),
                Point::new(3.0, 1.0),
                Point::new(6.0, 1.0),
                Point::new(6.0, 2.0),
            ]
        );
    }

    // -- curves --

    #[test]
    fn curve_flattens_to_steps_plus_start() {
        let polygons = flatten("M0 0C0 10 10 10 10 0");
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 17);
        // Endpoint is reproduced exactly, not approximately
        assert_eq!(*points_of(&polygons, 0).last().unwrap(), Point::new(10.0, 0.0));
    }

    #[test]
    fn custom_subdivision_count() {
        let (commands, _) = parse("M0 0C0 10 10 10 10 0");
        let mut flattener = Flattener::with_curve_steps(4);
        for command in &commands {
            flattener.apply(command);
        }
        let polygons = flattener.finish();
        assert_eq!(polygons[0].len(), 5);
    }

    #[test]
    fn zero_steps_still_reaches_the_endpoint() {
        let (commands, _) = parse("M0 0C0 10 10 10 10 0");
        let mut flattener = Flattener::with_curve_steps(0);
        for command in &commands {
            flattener.apply(command);
        }
        let polygons = flattener.finish();
        assert_eq!(
            points_of(&polygons, 0),
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]
        );
    }

    #[test]
    fn smooth_reflects_previous_control_point() {
        // After C the pen is at (10,0) with second control (10,10);
        // S must therefore start with control (10,-10)
        let with_smooth = flatten("M0 0C0 10 10 10 10 0S20 -10 20 0");
        let explicit = flatten("M0 0C0 10 10 10 10 0C10 -10 20 -10 20 0");
        assert_eq!(with_smooth, explicit);
    }

    #[test]
    fn smooth_without_previous_curve_uses_the_pen() {
        let with_smooth = flatten("M0 0S10 10 20 0");
        let explicit = flatten("M0 0C0 0 10 10 20 0");
        assert_eq!(with_smooth, explicit);
    }

    #[test]
    fn line_between_curves_resets_reflection() {
        let with_smooth = flatten("M0 0C0 10 10 10 10 0L12 0S22 -10 22 0");
        let explicit = flatten("M0 0C0 10 10 10 10 0L12 0C12 0 22 -10 22 0");
        assert_eq!(with_smooth, explicit);
    }

    #[test]
    fn consecutive_smooth_curves_chain_reflections() {
        // The second S reflects the first S's control point, not the C's
        let chained = flatten("M0 0C0 10 10 10 10 0S20 -10 20 0S30 10 30 0");
        let explicit = flatten("M0 0C0 10 10 10 10 0C10 -10 20 -10 20 0C20 10 30 10 30 0");
        assert_eq!(chained, explicit);
    }

    // -- subpaths and closing --

    #[test]
    fn close_appends_start_even_when_pen_is_there() {
        let polygons = flatten("M0 0L5 0L0 0Z");
        assert_eq!(
            points_of(&polygons, 0),
            &[
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn multiple_closed_subpaths() {
        let polygons = flatten("M0 0L1 0ZM5 5L6 5Z");
        assert_eq!(polygons.len(), 2);
        assert!(polygons[0].is_closed());
        assert!(polygons[1].is_closed());
    }

    #[test]
    fn unterminated_subpath_flushed_open() {
        let polygons = flatten("M0 0L5 5");
        assert_eq!(polygons.len(), 1);
        assert!(!polygons[0].is_closed());
    }

    #[test]
    fn moveto_without_close_splits_subpaths() {
        let polygons = flatten("M0 0L1 0M5 5L6 5");
        assert_eq!(polygons.len(), 2);
        assert!(!polygons[0].is_closed());
    }

    #[test]
    fn close_on_empty_buffer_is_a_pen_move_only() {
        let polygons = flatten("Z");
        assert!(polygons.is_empty());
    }

    #[test]
    fn drawing_after_close_starts_an_empty_buffer() {
        // No implicit start point: the fresh buffer begins at the first
        // vertex the next command appends
        let polygons = flatten("M0 0L5 0ZL7 7");
        assert_eq!(polygons.len(), 2);
        assert_eq!(points_of(&polygons, 1), &[Point::new(7.0, 7.0)]);
    }

    #[test]
    fn relative_moveto_after_close_starts_from_subpath_start() {
        let polygons = flatten("M5 5l5 0zm0 1l1 0");
        // After z the pen is back at (5,5), so m0 1 starts at (5,6)
        assert_eq!(
            points_of(&polygons, 1),
            &[Point::new(5.0, 6.0), Point::new(6.0, 6.0)]
        );
    }

    #[test]
    fn empty_command_list() {
        let polygons = flatten_commands(&[]);
        assert!(polygons.is_empty());
    }
}
