//! SVG preview of flattened outlines.
//!
//! A quick way to eyeball the flattener's output before embedding it:
//! every polygon becomes one `M ... L ... Z` subpath of a single `<path>`
//! filled with `fill-rule="evenodd"`, the same convention the emitted
//! arrays declare in their header. Path data is built as a raw `d` string
//! to keep full control over coordinate precision.

use std::fmt::Write;

use flatpath_core::{Polygon, Scalar, ViewBox};
use svg::node::element::Path as SvgPath;
use svg::Document;

/// Decimal places for preview coordinates.
const PREVIEW_PRECISION: usize = 6;

/// Rendered pixel width of the preview; height follows the view box's
/// aspect ratio.
const PREVIEW_WIDTH: Scalar = 256.0;

/// Build an SVG document showing the outlines filled with the even-odd
/// rule.
///
/// `view_box` is the frame the polygons live in: the source view box for
/// raw outlines, or the unit square for normalized ones.
#[must_use]
pub fn preview(polygons: &[Polygon], view_box: ViewBox) -> Document {
    let d = polygons_to_d(polygons, PREVIEW_PRECISION);
    let path = SvgPath::new()
        .set("d", d)
        .set("fill", "black")
        .set("fill-rule", "evenodd")
        .set("stroke", "none");

    let height = PREVIEW_WIDTH * view_box.height() / view_box.width();
    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set(
            "viewBox",
            format!(
                "0 0 {} {}",
                fmt_scalar(view_box.width(), PREVIEW_PRECISION),
                fmt_scalar(view_box.height(), PREVIEW_PRECISION),
            ),
        )
        .set("width", fmt_scalar(PREVIEW_WIDTH, PREVIEW_PRECISION))
        .set("height", fmt_scalar(height, PREVIEW_PRECISION))
        .add(path)
}

/// Render the preview to an SVG string.
#[must_use]
pub fn preview_to_string(polygons: &[Polygon], view_box: ViewBox) -> String {
    preview(polygons, view_box).to_string()
}

// ---------------------------------------------------------------------------
// Polygons → SVG "d" attribute
// ---------------------------------------------------------------------------

/// Convert flattened polygons to one SVG path data string.
///
/// Each polygon becomes an `M` followed by `L` segments; outlines whose
/// last vertex repeats the first also get a `Z`. Empty polygons are
/// skipped.
fn polygons_to_d(polygons: &[Polygon], precision: usize) -> String {
    let mut d = String::with_capacity(polygons.iter().map(Polygon::len).sum::<usize>() * 20);
    for polygon in polygons {
        let mut points = polygon.points.iter();
        let Some(first) = points.next() else {
            continue;
        };
        d.push('M');
        write_point(&mut d, first.x, first.y, precision);
        for p in points {
            d.push('L');
            write_point(&mut d, p.x, p.y, precision);
        }
        if polygon.is_closed() {
            d.push('Z');
        }
    }
    d
}

/// Write "x,y" to the string with the given precision.
///
/// Normalizes negative zero to positive zero for cleaner output.
fn write_point(d: &mut String, x: Scalar, y: Scalar, precision: usize) {
    let x = if x == 0.0 { 0.0 } else { x };
    let y = if y == 0.0 { 0.0 } else { y };
    let _ = write!(d, "{x:.precision$},{y:.precision$}");
}

/// Format a scalar to the given precision, stripping trailing zeros.
fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
