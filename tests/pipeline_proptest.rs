//! Property-based tests for the full pipeline
//!
//! These don't assert exact output; they pin the pipeline's global
//! guarantees: no panics on arbitrary input, determinism, and the
//! all-or-nothing error contract.

use proptest::prelude::*;
use strut::{compile, tokenize};

/// A value that can appear after a setting keyword or as a style keyword.
fn content_value() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,12}".prop_map(|s| s.trim().to_string())
}

/// Generate small well-formed documents from the grammar.
fn document() -> impl Strategy<Value = String> {
    let style_block = proptest::collection::vec(
        prop_oneof![
            Just("flex".to_string()),
            Just("column".to_string()),
            Just("center".to_string()),
            content_value(),
        ],
        0..4,
    )
    .prop_map(|keywords| {
        let mut block = String::from("    style:\n");
        for keyword in keywords {
            if !keyword.is_empty() {
                block.push_str(&format!("        {}\n", keyword));
            }
        }
        block
    });

    let header = content_value().prop_map(|text| {
        if text.is_empty() {
            "header:\n".to_string()
        } else {
            format!("header:\n    text={}\n", text)
        }
    });

    let input = (content_value(), content_value()).prop_map(|(text, placeholder)| {
        let mut element = String::from("input:\n");
        if !text.is_empty() {
            element.push_str(&format!("    text={}\n", text));
        }
        if !placeholder.is_empty() {
            element.push_str(&format!("    placeholder={}\n", placeholder));
        }
        element
    });

    let div = (proptest::option::of(content_value()), style_block).prop_map(
        |(class, style)| {
            let mut element = String::from("div:\n");
            if let Some(class) = class.filter(|c| !c.is_empty()) {
                element.push_str(&format!("    class={}\n", class));
            }
            element.push_str(&style);
            element
        },
    );

    proptest::collection::vec(prop_oneof![header, input, div], 0..4)
        .prop_map(|elements| elements.concat())
}

proptest! {
    #[test]
    fn compile_is_deterministic(source in document()) {
        let first = compile(&source);
        let second = compile(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_documents_compile(source in document()) {
        let html = compile(&source);
        prop_assert!(html.is_ok(), "failed on {:?}: {:?}", source, html);
    }

    #[test]
    fn lexer_never_panics(source in "[a-zA-Z0-9:=#\\n ]{0,64}") {
        // Ok or Err, but never a panic and never a partial token list
        // alongside an error.
        let _ = tokenize(&source);
    }

    #[test]
    fn pipeline_never_panics(source in "[a-zA-Z0-9:=\\n ]{0,64}") {
        let _ = compile(&source);
    }

    #[test]
    fn output_is_complete_or_absent(source in document()) {
        if let Ok(html) = compile(&source) {
            // Every opened element is closed.
            for tag in ["div", "header", "input"] {
                let opens = html.matches(&format!("<{}", tag)).count();
                let closes = html.matches(&format!("</{}>", tag)).count();
                prop_assert_eq!(opens, closes, "unbalanced <{}> in {:?}", tag, html);
            }
        }
    }
}
