//! Array-literal source emitters.
//!
//! Renders normalized outlines as a constant in a target language's
//! source syntax, ready to paste into the consuming program:
//! - one nested array per polygon, one `[x, y]` (or `{x, y}`) per vertex
//! - fixed-point coordinates, six decimal places by default
//! - a comment above each polygon with its index and vertex count
//! - a header naming the fill-rule convention (even-odd) the consumer
//!   is expected to apply
//!
//! [`summary`] produces the matching diagnostic block of per-polygon
//! point counts, also as line comments, so it can sit next to the arrays
//! in a generated file.

use std::fmt::Write;

use flatpath_core::Polygon;

/// Decimal places per coordinate unless overridden.
pub const DEFAULT_PRECISION: usize = 6;

/// Target language for emitted source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// `pub static NAME: &[&[[f64; 2]]]` item.
    #[default]
    Rust,
    /// `var name = [][][2]float64` declaration.
    Go,
}

/// Options controlling source emission.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Target language.
    pub language: Language,
    /// Name of the emitted constant.
    pub variable: String,
    /// Decimal places per coordinate.
    pub precision: usize,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            variable: "PATH_POLYGONS".to_owned(),
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Render the outlines as a source-code constant.
#[must_use]
pub fn emit(polygons: &[Polygon], opts: &SourceOptions) -> String {
    match opts.language {
        Language::Rust => emit_rust(polygons, opts),
        Language::Go => emit_go(polygons, opts),
    }
}

/// The diagnostic block printed alongside the arrays: overall and
/// per-polygon point counts, as line comments.
#[must_use]
pub fn summary(label: &str, polygons: &[Polygon]) -> String {
    let total: usize = polygons.iter().map(Polygon::len).sum();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// {label}: {} polygons, total {total} points",
        polygons.len()
    );
    for (i, polygon) in polygons.iter().enumerate() {
        let _ = writeln!(out, "//   Polygon {i}: {} points", polygon.len());
    }
    out
}

// ---------------------------------------------------------------------------
// Per-language emitters
// ---------------------------------------------------------------------------

fn emit_go(polygons: &[Polygon], opts: &SourceOptions) -> String {
    let name = &opts.variable;
    let p = opts.precision;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// {name} contains the icon path as normalized [0,1] polygon outlines."
    );
    let _ = writeln!(
        out,
        "// Each sub-slice is a closed polygon outline. Uses even-odd fill rule."
    );
    let _ = writeln!(out, "var {name} = [][][2]float64{{");
    for (i, polygon) in polygons.iter().enumerate() {
        let _ = writeln!(out, "\t// Polygon {i} ({} points)", polygon.len());
        out.push_str("\t{\n");
        for point in &polygon.points {
            let _ = writeln!(out, "\t\t{{{:.p$}, {:.p$}}},", point.x, point.y);
        }
        out.push_str("\t},\n");
    }
    out.push_str("}\n");
    out
}

fn emit_rust(polygons: &[Polygon], opts: &SourceOptions) -> String {
    let name = &opts.variable;
    let p = opts.precision;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/// {name} contains the icon path as normalized [0,1] polygon outlines."
    );
    let _ = writeln!(
        out,
        "/// Each inner slice is a closed polygon outline. Uses even-odd fill rule."
    );
    let _ = writeln!(out, "pub static {name}: &[&[[f64; 2]]] = &[");
    for (i, polygon) in polygons.iter().enumerate() {
        let _ = writeln!(out, "    // Polygon {i} ({} points)", polygon.len());
        out.push_str("    &[\n");
        for point in &polygon.points {
            let _ = writeln!(out, "        [{:.p$}, {:.p$}],", point.x, point.y);
        }
        out.push_str("    ],\n");
    }
    out.push_str("];\n");
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
