//! SVG path data to flattened polygon outlines.
//!
//! `flatpath-core` interprets the subset of the SVG path `d` grammar used
//! by icon sets (`M`/`L`/`H`/`V`/`C`/`S`/`Z` and their relative forms),
//! expands cubic Bezier curves into runs of straight segments, and
//! rescales the result into the unit square so it can be embedded in
//! other programs as plain point arrays.
//!
//! The pipeline is three pure stages:
//!
//! ```text
//! d string --parse--> commands --flatten--> polygons --normalize--> [0,1] polygons
//! ```
//!
//! ```
//! use flatpath_core::{flatten_commands, normalize, parse, ViewBox};
//!
//! let (commands, diagnostics) = parse("M0 0L10 0L10 10Z");
//! assert!(diagnostics.is_empty());
//!
//! let outlines = flatten_commands(&commands);
//! let view_box = ViewBox::new(10.0, 10.0)?;
//! let normalized = normalize(&outlines, view_box);
//!
//! assert_eq!(normalized[0].points.len(), 4);
//! assert!(normalized[0].is_closed());
//! # Ok::<(), flatpath_core::GeometryError>(())
//! ```

pub mod bezier;
pub mod command;
pub mod error;
pub mod flatten;
pub mod normalize;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod types;

pub use command::{CurveArgs, PathCommand, SmoothArgs};
pub use error::{GeometryError, ParseError, ParseErrorKind, ParseResult};
pub use flatten::{flatten_commands, Flattener, DEFAULT_CURVE_STEPS};
pub use normalize::normalize;
pub use parser::{parse, parse_strict};
pub use types::{Point, Polygon, Scalar, ViewBox, EPSILON};
