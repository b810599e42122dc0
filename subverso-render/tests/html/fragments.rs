//! Fragment rendering tests (payload → HTML)
//!
//! These decode real payload shapes and verify the exact markup produced,
//! since classes, attributes, and escaping are contractual.

use insta::assert_snapshot;
use subverso_render::{decode, render_node};

/// Helper to decode a JSON payload and render it to an HTML fragment
fn json_to_html(json: &str) -> String {
    let node = decode(json, "test").unwrap();
    render_node(&node)
}

#[test]
fn test_keyword_token() {
    let html = json_to_html(r#"{"token": {"kind": {"keyword": {}}, "content": "theorem"}}"#);
    assert_eq!(html, "<span class=\"lean-keyword\">theorem</span>");
}

#[test]
fn test_text_and_token_sequence() {
    let html = json_to_html(
        r#"{"seq": [{"text": "a "}, {"token": {"kind": {"var": {}}, "content": "x"}}]}"#,
    );
    assert_eq!(html, "a <span class=\"lean-var\">x</span>");
}

#[test]
fn test_token_kind_class_table() {
    let cases = [
        ("keyword", "lean-keyword"),
        ("const", "lean-const"),
        ("anonCtor", "lean-const"),
        ("var", "lean-var"),
        ("str", "lean-string"),
        ("option", "lean-option"),
        ("docComment", "lean-docstring"),
        ("sort", "lean-sort"),
        ("levelVar", "lean-level"),
        ("levelOp", "lean-level"),
        ("levelConst", "lean-level"),
        ("moduleName", "lean-module"),
        ("withType", "lean-expr"),
        ("unknown", "lean-text"),
    ];

    for (kind, class) in cases {
        let json = format!(r#"{{"token": {{"kind": {{"{kind}": {{}}}}, "content": "t"}}}}"#);
        let html = json_to_html(&json);
        assert_eq!(
            html,
            format!("<span class=\"{class}\">t</span>"),
            "kind {kind} maps to {class}"
        );
    }
}

#[test]
fn test_unrecognized_kind_tag_falls_back_to_text_class() {
    let html = json_to_html(r#"{"token": {"kind": {"hologram": {}}, "content": "t"}}"#);
    assert_eq!(html, "<span class=\"lean-text\">t</span>");
}

#[test]
fn test_definition_site_gets_modifier_class() {
    let html = json_to_html(
        r#"{"token": {"kind": {"const": {"isDef": true}}, "content": "add"}}"#,
    );
    assert_eq!(html, "<span class=\"lean-const lean-def\">add</span>");
}

/// A placeholder proof renders with the dedicated class regardless of the
/// declared kind.
#[test]
fn test_sorry_override() {
    let html = json_to_html(r#"{"token": {"kind": {"const": {}}, "content": "sorry"}}"#);
    assert_eq!(html, "<span class=\"lean-sorry\">sorry</span>");
}

#[test]
fn test_const_hover_attributes() {
    let html = json_to_html(
        r#"{"token": {"kind": {"const": {"name": ["Nat", "succ"], "signature": "Nat → Nat"}}, "content": "succ"}}"#,
    );
    assert_snapshot!(html, @r#"<span class="lean-const" data-signature="Nat → Nat" data-name="Nat.succ">succ</span>"#);
}

#[test]
fn test_keyword_docs_attribute() {
    let html = json_to_html(
        r#"{"token": {"kind": {"keyword": {"docs": "Introduces a theorem"}}, "content": "theorem"}}"#,
    );
    assert_snapshot!(html, @r#"<span class="lean-keyword" data-docs="Introduces a theorem">theorem</span>"#);
}

#[test]
fn test_severity_precedence_picks_error_over_warning() {
    let html = json_to_html(
        r#"{"span": {
            "info": [["warning", {"text": "slow"}], ["error", {"text": "broken"}]],
            "content": {"text": "x"}
        }}"#,
    );
    assert!(html.starts_with("<span class=\"lean-span lean-error\""));
    assert!(html.contains("title=\"slow\nbroken\""));
}

#[test]
fn test_info_only_span() {
    let html = json_to_html(
        r#"{"span": {"info": [["info", {"text": "note"}]], "content": {"text": "x"}}}"#,
    );
    assert_eq!(
        html,
        "<span class=\"lean-span lean-info\" title=\"note\">x</span>"
    );
}

#[test]
fn test_point_marker_has_no_visible_content() {
    let html = json_to_html(
        r#"{"point": {"kind": "error", "info": {"text": "unsolved goals"}}}"#,
    );
    assert_eq!(
        html,
        "<span class=\"lean-point lean-point-error\" title=\"unsolved goals\"></span>"
    );
}

#[test]
fn test_unparsed_falls_back_to_escaped_text() {
    let html = json_to_html(r#"{"unparsed": "fun x => <x>"}"#);
    assert_eq!(html, "fun x =&gt; &lt;x&gt;");
}

#[test]
fn test_nested_spans_preserve_nesting() {
    let html = json_to_html(
        r#"{"span": {
            "info": [["warning", {"text": "outer"}]],
            "content": {"span": {
                "info": [["error", {"text": "inner"}]],
                "content": {"text": "x"}
            }}
        }}"#,
    );
    assert_snapshot!(html, @r#"<span class="lean-span lean-warning" title="outer"><span class="lean-span lean-error" title="inner">x</span></span>"#);
}

/// Rendering the same decoded tree twice yields byte-identical output.
#[test]
fn test_rendering_is_idempotent() {
    let json = r#"{"tactics": {
        "info": [{"hypotheses": [], "conclusion": {"text": "True"}}],
        "startPos": 3, "endPos": 9,
        "content": {"token": {"kind": {"unknown": {}}, "content": "trivial"}}
    }}"#;
    let node = decode(json, "test").unwrap();
    assert_eq!(render_node(&node), render_node(&node));
}
