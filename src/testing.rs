//! Testing utilities and verified sample documents
//!
//! # Sample Sources
//!
//! strut is a small format, but small details (indentation, keyword spelling,
//! where a setting may appear) are easy to get wrong when samples are written
//! ad hoc inside test files. [StrutSources] is the single home for verified
//! sample documents; unit and integration tests should pull sources from here
//! instead of inlining their own.
//!
//! ```rust-example
//! use strut::testing::StrutSources;
//!
//! let source = StrutSources::get("kitchen-sink").unwrap();
//! let html = strut::compile(source)?;
//! ```

/// Verified strut sample documents, keyed by name.
pub struct StrutSources;

/// The original driver document: a div with class, styles, a header and an
/// input with all of its settings.
pub const KITCHEN_SINK: &str = "\
div:
    class=mainDIV
    style:
        flex
        column
        center
    header:
        text=hey man
    input:
        class=main
        style:
            flex
        text=inputhere
        placeholder=yoo bro
";

/// A header with text and no style.
pub const HEADER_ONLY: &str = "\
header:
    text=hey man
";

/// An input exercising every setting an input accepts.
pub const INPUT_SETTINGS: &str = "\
input:
    class=main
    style:
        flex
    text=inputhere
    placeholder=yoo bro
";

/// A div nested inside a div, each with its own style and class.
pub const NESTED_DIVS: &str = "\
div:
    class=outer
    style:
        flex
    div:
        class=inner
        style:
            column
";

/// A style block with an unrecognized keyword between two recognized ones.
pub const UNKNOWN_STYLE_KEYWORD: &str = "\
div:
    style:
        flex
        glow
        center
";

impl StrutSources {
    /// Look up a sample document by name.
    pub fn get(name: &str) -> Option<&'static str> {
        match name {
            "kitchen-sink" => Some(KITCHEN_SINK),
            "header-only" => Some(HEADER_ONLY),
            "input-settings" => Some(INPUT_SETTINGS),
            "nested-divs" => Some(NESTED_DIVS),
            "unknown-style-keyword" => Some(UNKNOWN_STYLE_KEYWORD),
            _ => None,
        }
    }

    /// All sample names, for tests that sweep the collection.
    pub fn names() -> &'static [&'static str] {
        &[
            "kitchen-sink",
            "header-only",
            "input-settings",
            "nested-divs",
            "unknown-style-keyword",
        ]
    }
}
