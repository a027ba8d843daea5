//! Demo plugin rules
//!
//! A small but complete plugin: one opt-in lint rule, one default lint rule
//! with an option, and one breaking rule comparing against previous files.

pub mod field_no_delete;
pub mod syntax_unspecified;
pub mod timestamp_suffix;

use cpk_domain::{CategorySpec, Spec};

/// Style rules that only look at the current files
pub const CATEGORY_STYLE_BASIC: &str = "STYLE_BASIC";

/// Rules that protect wire compatibility between versions
pub const CATEGORY_WIRE_SAFETY: &str = "WIRE_SAFETY";

/// The demo plugin spec
pub fn demo_spec() -> Spec {
    Spec::new(vec![
        syntax_unspecified::rule(),
        timestamp_suffix::rule(),
        field_no_delete::rule(),
    ])
    .with_categories(vec![
        CategorySpec::new(
            CATEGORY_STYLE_BASIC,
            "Checks basic naming and declaration style.",
        ),
        CategorySpec::new(
            CATEGORY_WIRE_SAFETY,
            "Checks that changes keep the wire format compatible.",
        ),
    ])
}
