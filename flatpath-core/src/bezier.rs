//! Cubic Bezier evaluation and flattening.
//!
//! [`CubicSegment`] holds the four control points of one cubic curve and
//! expands it into straight segments by uniform parametric sampling.
//! Uniform sampling (rather than adaptive subdivision) keeps point counts
//! predictable, which matters when the output is pasted into source code
//! and reviewed as a diff.

use crate::types::{Point, Scalar};

/// Four control points of a cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicSegment {
    /// Create a new cubic segment from four control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the point at parameter `t` in [0, 1].
    ///
    /// At `t = 1` the first three Bernstein weights vanish exactly, so the
    /// result is bit-identical to `p3`. Flattened curves therefore end
    /// exactly on their stated endpoint, with no accumulated drift.
    #[expect(
        clippy::many_single_char_names,
        reason = "standard Bezier math variable names (a, b, c, d, s, t)"
    )]
    #[must_use]
    pub fn eval(&self, t: Scalar) -> Point {
        let s = 1.0 - t;
        let a = s * s * s;
        let b = 3.0 * s * s * t;
        let c = 3.0 * s * t * t;
        let d = t * t * t;
        Point::new(
            d.mul_add(
                self.p3.x,
                a.mul_add(self.p0.x, b.mul_add(self.p1.x, c * self.p2.x)),
            ),
            d.mul_add(
                self.p3.y,
                a.mul_add(self.p0.y, b.mul_add(self.p1.y, c * self.p2.y)),
            ),
        )
    }

    /// Append `steps` uniformly sampled points at `t = i/steps` for
    /// `i = 1..=steps`.
    ///
    /// The start point is excluded: callers already hold the pen there.
    /// The last appended point is exactly `p3`.
    pub fn flatten_into(&self, out: &mut Vec<Point>, steps: usize) {
        out.reserve(steps);
        for i in 1..=steps {
            let t = i as Scalar / steps as Scalar;
            out.push(self.eval(t));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EPSILON;

    fn arch() -> CubicSegment {
        CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(4.0, 0.0),
        )
    }

    #[test]
    fn eval_endpoints() {
        let seg = arch();
        let p0 = seg.eval(0.0);
        assert!((p0.x).abs() < EPSILON);
        assert!((p0.y).abs() < EPSILON);
        let p1 = seg.eval(1.0);
        assert!((p1.x - 4.0).abs() < EPSILON);
        assert!((p1.y).abs() < EPSILON);
    }

    #[test]
    fn eval_midpoint_of_line() {
        // Straight line: all control points collinear
        let seg = CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(10.0 / 3.0, 0.0),
            Point::new(20.0 / 3.0, 0.0),
            Point::new(10.0, 0.0),
        );
        let mid = seg.eval(0.5);
        assert!((mid.x - 5.0).abs() < EPSILON);
        assert!((mid.y).abs() < EPSILON);
    }

    #[test]
    fn flatten_appends_exactly_steps_points() {
        let mut out = Vec::new();
        arch().flatten_into(&mut out, 16);
        assert_eq!(out.len(), 16);
    }

    #[test]
    fn flatten_excludes_start_and_ends_on_endpoint() {
        let seg = arch();
        let mut out = Vec::new();
        seg.flatten_into(&mut out, 16);
        assert_ne!(out[0], seg.p0);
        // Exact equality, not tolerance: t = 1 reproduces p3 bit-for-bit
        assert_eq!(out[15], seg.p3);
    }

    #[test]
    fn single_step_is_a_chord() {
        let seg = arch();
        let mut out = Vec::new();
        seg.flatten_into(&mut out, 1);
        assert_eq!(out, vec![seg.p3]);
    }
}
