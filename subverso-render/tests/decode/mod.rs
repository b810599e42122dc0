//! Tests for payload decoding: shape equivalence and the decode error path.

use base64::Engine;
use subverso_render::{decode, decode_base64, render_node, RenderError};

/// The wrapped and unwrapped spellings of each constructor must render
/// identically for equivalent content.
#[test]
fn test_token_shape_equivalence() {
    let unwrapped = r#"{"token": {"kind": {"keyword": {}}, "content": "theorem"}}"#;
    let wrapped = r#"{"token": {"tok": {"kind": {"keyword": {}}, "content": "theorem"}}}"#;

    let a = render_node(&decode(unwrapped, "test").unwrap());
    let b = render_node(&decode(wrapped, "test").unwrap());
    assert_eq!(a, b);
    assert_eq!(a, "<span class=\"lean-keyword\">theorem</span>");
}

#[test]
fn test_text_shape_equivalence() {
    let unwrapped = r#"{"text": "a < b"}"#;
    let wrapped = r#"{"text": {"str": "a < b"}}"#;

    let a = render_node(&decode(unwrapped, "test").unwrap());
    let b = render_node(&decode(wrapped, "test").unwrap());
    assert_eq!(a, b);
    assert_eq!(a, "a &lt; b");
}

#[test]
fn test_seq_shape_equivalence() {
    let unwrapped = r#"{"seq": [{"text": "a "}, {"token": {"kind": {"var": {}}, "content": "x"}}]}"#;
    let wrapped = r#"{"seq": {"highlights": [{"text": "a "}, {"token": {"kind": {"var": {}}, "content": "x"}}]}}"#;

    let a = render_node(&decode(unwrapped, "test").unwrap());
    let b = render_node(&decode(wrapped, "test").unwrap());
    assert_eq!(a, b);
    assert_eq!(a, "a <span class=\"lean-var\">x</span>");
}

/// Unrecognized shapes render as empty rather than failing the call.
#[test]
fn test_unrecognized_node_renders_empty() {
    let node = decode(r#"{"frobnicate": 1}"#, "test").unwrap();
    assert_eq!(render_node(&node), "");
}

#[test]
fn test_null_renders_empty() {
    let node = decode("null", "test").unwrap();
    assert_eq!(render_node(&node), "");
}

#[test]
fn test_bare_string_renders_as_text() {
    let node = decode(r#""plain & simple""#, "test").unwrap();
    assert_eq!(render_node(&node), "plain &amp; simple");
}

#[test]
fn test_bare_array_renders_as_sequence() {
    let node = decode(r#"[{"text": "a"}, {"text": "b"}]"#, "test").unwrap();
    assert_eq!(render_node(&node), "ab");
}

/// A base64 payload that decodes to invalid JSON surfaces a decode error;
/// no partial HTML is returned.
#[test]
fn test_base64_of_invalid_json_is_fatal() {
    let encoded = base64::engine::general_purpose::STANDARD.encode("{definitely not json");
    let err = decode_base64(&encoded, "doc.tex:7").unwrap_err();

    match err {
        RenderError::Decode { origin, reason } => {
            assert_eq!(origin, "doc.tex:7");
            assert!(reason.contains("invalid JSON"));
        }
        other => panic!("Expected decode error, got {other:?}"),
    }
}

#[test]
fn test_invalid_base64_is_fatal() {
    let err = decode_base64("%%%", "doc.tex:7").unwrap_err();
    assert!(matches!(err, RenderError::Decode { .. }));
}

#[test]
fn test_base64_and_raw_decode_to_same_tree() {
    let json = r#"{"span": {"info": [["warning", {"text": "hm"}]], "content": {"text": "x"}}}"#;
    let encoded = base64::engine::general_purpose::STANDARD.encode(json);

    assert_eq!(
        decode(json, "test").unwrap(),
        decode_base64(&encoded, "test").unwrap()
    );
}
