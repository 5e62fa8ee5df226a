//! Element tests: style blocks and keyword resolution

use rstest::rstest;
use strut::codegen::resolve_style;
use strut::compile;
use strut::testing::StrutSources;

#[rstest]
#[case("flex", "display: flex;")]
#[case("column", "flex-direction: column;")]
#[case("center", "align-items: center; justify-content: center;")]
fn test_recognized_keywords(#[case] keyword: &str, #[case] fragment: &str) {
    assert_eq!(resolve_style(keyword), fragment);

    let source = format!("div:\n    style:\n        {}\n", keyword);
    let html = compile(&source).unwrap();
    assert_eq!(html, format!("<div style=\"{}\"></div>", fragment));
}

#[rstest]
#[case("glow")]
#[case("FLEX")]
#[case("display: flex;")]
fn test_unrecognized_keywords_resolve_empty(#[case] keyword: &str) {
    assert_eq!(resolve_style(keyword), "");
}

#[test]
fn test_unknown_keyword_does_not_affect_neighbors() {
    let html = compile(StrutSources::get("unknown-style-keyword").unwrap()).unwrap();
    assert_eq!(
        html,
        "<div style=\"display: flex;align-items: center; justify-content: center;\"></div>"
    );
}

#[test]
fn test_empty_style_block() {
    // style: followed immediately by another element yields an empty node.
    let html = compile("div:\n    style:\n    header:\n        text=hi\n").unwrap();
    assert_eq!(html, "<div style=\"\"><header style=\"\">hi</header></div>");
}

#[test]
fn test_repeated_keyword_repeats_fragment() {
    let html = compile("div:\n    style:\n        flex\n        flex\n").unwrap();
    assert_eq!(html, "<div style=\"display: flex;display: flex;\"></div>");
}
