//! Coordinate normalization into the unit square.

use crate::types::{Point, Polygon, ViewBox};

/// Rescale every vertex of every polygon by the view-box dimensions, so
/// that coordinates inside `[0, width] x [0, height]` land in `[0, 1]`.
///
/// Pure: the input is left untouched. The x and y axes are divided
/// independently, so consumers reapply the view box's aspect ratio when
/// rendering. Coordinates outside the view box map outside the unit
/// square by the same rule.
#[must_use]
pub fn normalize(polygons: &[Polygon], view_box: ViewBox) -> Vec<Polygon> {
    polygons
        .iter()
        .map(|polygon| {
            polygon
                .points
                .iter()
                .map(|p| Point::new(p.x / view_box.width(), p.y / view_box.height()))
                .collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
