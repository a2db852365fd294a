//! Core data types shared across the crate.
//!
//! Geometry is plain `f64` throughout, with [`kurbo::Point`] as the point
//! type so the flattener's vector arithmetic stays short. [`Polygon`] and
//! [`ViewBox`] are the two values that cross the crate boundary: the
//! flattener produces polygons, the normalizer rescales them against a
//! view box.

use crate::error::GeometryError;

pub use kurbo::Point;

/// Scalar type used for all coordinates.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// Polygon
// ---------------------------------------------------------------------------

/// One flattened outline: an ordered sequence of vertices.
///
/// A polygon produced from a `Z`-terminated subpath repeats its first
/// point at the end, even when the pen already sits on the start point.
/// An unterminated trailing subpath is emitted as-is, without the
/// closing repeat.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a vertex list.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the outline ends exactly where it starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewBox
// ---------------------------------------------------------------------------

/// The reference frame for normalization: the source image's viewBox
/// dimensions.
///
/// Construction validates that both dimensions are finite and strictly
/// positive, so normalization itself can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    width: Scalar,
    height: Scalar,
}

impl ViewBox {
    /// Create a view box from its dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidViewBox`] when either dimension is
    /// zero, negative, or not finite.
    pub fn new(width: Scalar, height: Scalar) -> Result<Self, GeometryError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(GeometryError::InvalidViewBox { width, height })
        }
    }

    /// Width of the reference frame.
    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.width
    }

    /// Height of the reference frame.
    #[must_use]
    pub const fn height(&self) -> Scalar {
        self.height
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
