//! Element tests: divs

use strut::compile;
use strut::testing::StrutSources;

#[test]
fn test_div_with_class_and_styles() {
    let html = compile("div:\n    class=mainDIV\n    style:\n        flex\n").unwrap();
    assert_eq!(html, "<div class=\"mainDIV\" style=\"display: flex;\"></div>");
}

#[test]
fn test_div_without_settings_has_empty_style() {
    let html = compile("div:\n").unwrap();
    assert_eq!(html, "<div style=\"\"></div>");
}

#[test]
fn test_style_concatenation_order_and_separators() {
    let html = compile("div:\n    style:\n        flex\n        column\n        center\n").unwrap();
    assert_eq!(
        html,
        "<div style=\"display: flex;flex-direction: column;align-items: center; justify-content: center;\"></div>"
    );
}

#[test]
fn test_two_style_blocks_concatenate_in_document_order() {
    let html =
        compile("div:\n    style:\n        flex\n    style:\n        column\n").unwrap();
    assert_eq!(
        html,
        "<div style=\"display: flex;flex-direction: column;\"></div>"
    );
}

#[test]
fn test_nested_divs_have_independent_attributes() {
    let html = compile(StrutSources::get("nested-divs").unwrap()).unwrap();
    assert_eq!(
        html,
        "<div class=\"outer\" style=\"display: flex;\"><div class=\"inner\" style=\"flex-direction: column;\"></div></div>"
    );
}

#[test]
fn test_div_skips_tokens_it_does_not_recognize() {
    // title= is lexed but no div rule consumes it; the div carries on.
    let html = compile("div:\n    title=whatever\n    header:\n        text=hi\n").unwrap();
    assert_eq!(html, "<div style=\"\"><header style=\"\">hi</header></div>");
}

#[test]
fn test_div_content_preserves_child_order() {
    let html = compile(
        "div:\n    header:\n        text=first\n    input:\n        text=second\n",
    )
    .unwrap();
    assert_eq!(
        html,
        "<div style=\"\"><header style=\"\">first</header><input style=\"\">second</input></div>"
    );
}
