//! Style keyword resolution
//!
//! strut styles are bare keywords, one per line under a `style:` block. Each
//! keyword resolves independently through the fixed table below. Unrecognized
//! keywords resolve to the empty string, silently; that tolerance is part of
//! the format's contract.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Keyword -> CSS fragment table.
static STYLE_RULES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("flex", "display: flex;"),
        ("column", "flex-direction: column;"),
        ("center", "align-items: center; justify-content: center;"),
    ])
});

/// Resolve one style keyword to its CSS fragment.
///
/// Unknown keywords resolve to `""` rather than erroring.
pub fn resolve_style(keyword: &str) -> &'static str {
    STYLE_RULES.get(keyword).copied().unwrap_or("")
}
