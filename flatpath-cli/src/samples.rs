//! Embedded sample icons.
//!
//! The two Font Awesome solid icons the tool was built around. They make
//! a good smoke test for the whole pipeline: multiple subpaths, relative
//! curves, smooth reflections, and axis-aligned segments in one string.
//! Path data is from Font Awesome Free (CC BY 4.0).

/// One embedded sample icon.
pub struct SampleIcon {
    /// Lookup name for `--icon`.
    pub name: &'static str,
    /// Label used in the summary block.
    pub label: &'static str,
    /// Contents of the SVG `d` attribute.
    pub path_data: &'static str,
    /// Source viewBox width.
    pub width: f64,
    /// Source viewBox height.
    pub height: f64,
    /// Default constant name for Go output.
    pub go_name: &'static str,
    /// Default constant name for Rust output.
    pub rust_name: &'static str,
}

/// Embedded icons, looked up by [`find`].
pub static SAMPLES: &[SampleIcon] = &[
    // Font Awesome lock (solid), viewBox 0 0 448 512
    SampleIcon {
        name: "lock",
        label: "Lock icon",
        path_data: "M144 144l0 48 160 0 0-48c0-44.2-35.8-80-80-80s-80 35.8-80 80zM80 192l0-48C80 64.5 144.5 0 224 0s144 64.5 144 144l0 48 16 0c35.3 0 64 28.7 64 64l0 192c0 35.3-28.7 64-64 64L64 512c-35.3 0-64-28.7-64-64L0 256c0-35.3 28.7-64 64-64l16 0z",
        width: 448.0,
        height: 512.0,
        go_name: "faLockPolygons",
        rust_name: "FA_LOCK_POLYGONS",
    },
    // Font Awesome unlock (solid), viewBox 0 0 448 512
    SampleIcon {
        name: "unlock",
        label: "Unlock icon",
        path_data: "M144 144c0-44.2 35.8-80 80-80c31.9 0 59.4 18.6 72.3 45.7c7.6 16 26.7 22.8 42.6 15.2s22.8-26.7 15.2-42.6C331 33.7 281.5 0 224 0C144.5 0 80 64.5 80 144l0 48-16 0c-35.3 0-64 28.7-64 64L0 448c0 35.3 28.7 64 64 64l320 0c35.3 0 64-28.7 64-64l0-192c0-35.3-28.7-64-64-64l-240 0 0-48z",
        width: 448.0,
        height: 512.0,
        go_name: "faUnlockPolygons",
        rust_name: "FA_UNLOCK_POLYGONS",
    },
];

/// Find a sample icon by name (case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<&'static SampleIcon> {
    SAMPLES.iter().find(|icon| icon.name.eq_ignore_ascii_case(name))
}
