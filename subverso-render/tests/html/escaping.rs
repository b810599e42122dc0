//! Escaping safety tests
//!
//! For all string leaves, the rendered output must contain no unescaped
//! `<`, `>`, or `"` and every `&` must begin an entity we emitted.

use proptest::prelude::*;
use subverso_render::ir::nodes::{HighlightedNode, Token, TokenKind};
use subverso_render::render_node;

/// Asserts that a rendered text run is fully escaped: no raw markup
/// characters, and `&` only as the start of one of our entities.
fn assert_escaped(output: &str) {
    assert!(!output.contains('<'), "raw '<' in {output:?}");
    assert!(!output.contains('>'), "raw '>' in {output:?}");
    assert!(!output.contains('"'), "raw '\"' in {output:?}");

    let mut rest = output;
    while let Some(pos) = rest.find('&') {
        let tail = &rest[pos..];
        assert!(
            tail.starts_with("&amp;")
                || tail.starts_with("&lt;")
                || tail.starts_with("&gt;")
                || tail.starts_with("&quot;"),
            "bare '&' in {output:?}"
        );
        rest = &tail[1..];
    }
}

proptest! {
    #[test]
    fn text_leaves_are_escaped(s in ".*") {
        let output = render_node(&HighlightedNode::Text(s));
        assert_escaped(&output);
    }

    #[test]
    fn unparsed_leaves_are_escaped(s in ".*") {
        let output = render_node(&HighlightedNode::Unparsed(s));
        assert_escaped(&output);
    }

    #[test]
    fn token_content_is_escaped(s in ".*") {
        let output = render_node(&HighlightedNode::Token(Token {
            kind: TokenKind::Str,
            content: s,
        }));
        // Strip the fixed wrapper; what remains is the escaped content.
        let inner = output
            .strip_prefix("<span class=\"lean-string\">")
            .or_else(|| output.strip_prefix("<span class=\"lean-sorry\">"))
            .and_then(|rest| rest.strip_suffix("</span>"))
            .expect("token wrapper");
        assert_escaped(inner);
    }

    #[test]
    fn attribute_values_are_escaped(s in ".*") {
        let output = render_node(&HighlightedNode::Token(Token {
            kind: TokenKind::Var { ty: Some(s) },
            content: "x".to_string(),
        }));
        let start = output.find("data-type=\"").expect("data-type attr") + "data-type=\"".len();
        let end = output[start..].find('"').expect("attr close") + start;
        assert_escaped(&output[start..end]);
    }

    /// Escaping is injective on the markup characters: decoding the entities
    /// back recovers the original string.
    #[test]
    fn escaping_round_trips(s in ".*") {
        let output = render_node(&HighlightedNode::Text(s.clone()));
        let decoded = output
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&");
        prop_assert_eq!(decoded, s);
    }
}

#[test]
fn test_all_markup_characters_at_once() {
    let output = render_node(&HighlightedNode::Text("<a href=\"x\">&amp;</a>".to_string()));
    assert_eq!(
        output,
        "&lt;a href=&quot;x&quot;&gt;&amp;amp;&lt;/a&gt;"
    );
}
