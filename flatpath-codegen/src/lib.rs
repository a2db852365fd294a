//! Output formatting for flattened path data.
//!
//! Two consumers of the same polygon outlines:
//! - [`source`] renders them as literal array source text (Rust or Go)
//!   for embedding into a program
//! - [`preview`] renders them as an SVG document for visual inspection
//!
//! Both stay byte-for-byte deterministic for a given input, so generated
//! files diff cleanly across runs.

pub mod preview;
pub mod source;

pub use preview::{preview, preview_to_string};
pub use source::{emit, summary, Language, SourceOptions, DEFAULT_PRECISION};
