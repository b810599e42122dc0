//! Goal panel rendering tests (tactic blocks and proof state display)

use insta::assert_snapshot;
use subverso_render::formats::html::render_goals;
use subverso_render::ir::from_json::goal_from_value;
use subverso_render::{decode, render_node};

fn json_to_html(json: &str) -> String {
    render_node(&decode(json, "test").unwrap())
}

#[test]
fn test_tactic_without_goals_renders_span_only() {
    let html = json_to_html(
        r#"{"tactics": {"info": [], "startPos": 18, "endPos": 22,
            "content": {"token": {"kind": {"unknown": {}}, "content": "simp"}}}}"#,
    );
    assert_eq!(
        html,
        "<span class=\"lean-tactic\"><span class=\"lean-text\">simp</span></span>"
    );
}

#[test]
fn test_tactic_with_goal_renders_hidden_panel() {
    let html = json_to_html(
        r#"{"tactics": {
            "info": [{"hypotheses": [], "conclusion": {"text": "True"}}],
            "startPos": 18, "endPos": 22,
            "content": {"text": "trivial"}
        }}"#,
    );

    assert!(html.contains("<span class=\"lean-tactic\" data-goals=\"goal-18-22\">trivial</span>"));
    assert!(html.contains("<span class=\"lean-goals\" id=\"goal-18-22\" style=\"display:none;\">"));
    assert!(html.contains("<span class=\"lean-turnstile\">\u{22a2} </span>True"));
}

/// Identical source ranges yield identical panel ids across renders.
#[test]
fn test_panel_id_is_deterministic() {
    let json = r#"{"tactics": {
        "info": [{"hypotheses": [], "conclusion": {"text": "True"}}],
        "startPos": 5, "endPos": 11,
        "content": {"text": "simp"}
    }}"#;
    let first = json_to_html(json);
    let second = json_to_html(json);
    assert_eq!(first, second);
    assert!(first.contains("id=\"goal-5-11\""));
}

#[test]
fn test_two_named_goals_render_case_headers() {
    let html = json_to_html(
        r#"{"tactics": {
            "info": [
                {"name": "inl", "hypotheses": [], "conclusion": {"text": "P"}},
                {"name": "inr", "hypotheses": [], "conclusion": {"text": "Q"}}
            ],
            "startPos": 0, "endPos": 4,
            "content": {"text": "cases h"}
        }}"#,
    );

    assert!(html.contains("<div class=\"lean-goal-header\">case inl (1/2)</div>"));
    assert!(html.contains("<div class=\"lean-goal-header\">case inr (2/2)</div>"));
}

#[test]
fn test_two_unnamed_goals_render_counted_headers() {
    let html = json_to_html(
        r#"{"tactics": {
            "info": [
                {"hypotheses": [], "conclusion": {"text": "P"}},
                {"hypotheses": [], "conclusion": {"text": "Q"}}
            ],
            "startPos": 0, "endPos": 4,
            "content": {"text": "constructor"}
        }}"#,
    );

    assert!(html.contains("<div class=\"lean-goal-header\">goal 1/2</div>"));
    assert!(html.contains("<div class=\"lean-goal-header\">goal 2/2</div>"));
}

#[test]
fn test_single_unnamed_goal_has_no_header() {
    let html = json_to_html(
        r#"{"tactics": {
            "info": [{"hypotheses": [], "conclusion": {"text": "True"}}],
            "startPos": 0, "endPos": 4,
            "content": {"text": "trivial"}
        }}"#,
    );
    assert!(!html.contains("lean-goal-header"));
}

#[test]
fn test_single_named_goal_renders_case_header() {
    let html = json_to_html(
        r#"{"tactics": {
            "info": [{"name": "succ", "hypotheses": [], "conclusion": {"text": "P"}}],
            "startPos": 0, "endPos": 4,
            "content": {"text": "induction n"}
        }}"#,
    );
    assert!(html.contains("<div class=\"lean-goal-header\">case succ</div>"));
}

/// Zero goals renders the fixed completion message, not an empty block.
#[test]
fn test_zero_goals_render_accomplished_message() {
    assert_snapshot!(render_goals(&[]), @r#"<span class="lean-goal-message">Goals accomplished</span>"#);
}

#[test]
fn test_hypotheses_render_names_and_types() {
    let html = json_to_html(
        r#"{"tactics": {
            "info": [{
                "hypotheses": [{
                    "names": [
                        {"kind": {"var": {}}, "content": "n"},
                        {"kind": {"var": {}}, "content": "m"}
                    ],
                    "typeAndVal": {"token": {"kind": {"const": {}}, "content": "Nat"}}
                }],
                "conclusion": {"text": "n + m = m + n"}
            }],
            "startPos": 7, "endPos": 12,
            "content": {"text": "omega"}
        }}"#,
    );

    assert!(html.contains("<div class=\"lean-hypotheses\">"));
    assert!(html.contains(
        "<span class=\"lean-hyp-names\"><span class=\"lean-var\">n</span> <span class=\"lean-var\">m</span></span>"
    ));
    assert!(html.contains("<span class=\"lean-hyp-colon\"> : </span>"));
    assert!(html.contains(
        "<span class=\"lean-hyp-type\"><span class=\"lean-const\">Nat</span></span>"
    ));
}

#[test]
fn test_goal_prefix_is_respected() {
    let goal = goal_from_value(&serde_json::json!({
        "goalPrefix": "|- ",
        "hypotheses": [],
        "conclusion": {"text": "True"}
    }));
    let html = render_goals(&[goal]);
    assert!(html.contains("<span class=\"lean-turnstile\">|- </span>True"));
}

#[test]
fn test_goal_conclusion_keeps_highlighting() {
    let html = json_to_html(
        r#"{"tactics": {
            "info": [{"hypotheses": [], "conclusion": {
                "seq": [
                    {"token": {"kind": {"const": {}}, "content": "Eq"}},
                    {"text": " a b"}
                ]
            }}],
            "startPos": 1, "endPos": 2,
            "content": {"text": "rfl"}
        }}"#,
    );
    assert!(html.contains("<span class=\"lean-const\">Eq</span> a b"));
}
