//! HTML serialization (highlighted tree → HTML fragment)
//!
//! Fragments are built bottom-up: each renderer escapes its own text,
//! renders its children recursively, and concatenates the results in
//! document order. There is no separate assembly pass and no shared state,
//! so rendering the same tree twice yields byte-identical output.

use super::HtmlOptions;
use crate::common::plain::message_to_text;
use crate::ir::nodes::{
    Diagnostic, Goal, HighlightedNode, Hypothesis, Point, Span, Tactics, Token, TokenKind,
};

/// Class applied to tokens whose content is the placeholder proof.
const SORRY_CLASS: &str = "lean-sorry";

/// Render a highlighted tree to an HTML fragment.
///
/// Total over the canonical tree: unrecognized or empty nodes contribute an
/// empty string, never an error.
pub fn render_fragment(node: &HighlightedNode) -> String {
    match node {
        HighlightedNode::Token(token) => render_token(token),
        HighlightedNode::Text(text) => escape_html(text),
        HighlightedNode::Seq(items) => items.iter().map(render_fragment).collect(),
        HighlightedNode::Span(span) => render_span(span),
        HighlightedNode::Tactics(tactics) => render_tactics(tactics),
        HighlightedNode::Point(point) => render_point(point),
        HighlightedNode::Unparsed(text) => escape_html(text),
        HighlightedNode::Empty => String::new(),
    }
}

fn render_token(token: &Token) -> String {
    // The placeholder proof overrides the declared kind.
    let css_class = if token.content.trim() == "sorry" {
        SORRY_CLASS
    } else {
        token_class(&token.kind)
    };

    let attrs = token_data_attrs(&token.kind);
    let content = escape_html(&token.content);

    format!("<span class=\"{css_class}\"{attrs}>{content}</span>")
}

/// Fixed token-kind → CSS-class table.
fn token_class(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword { .. } => "lean-keyword",
        TokenKind::Const { is_def: true, .. } => "lean-const lean-def",
        TokenKind::Const { .. } => "lean-const",
        TokenKind::AnonCtor => "lean-const",
        TokenKind::Var { .. } => "lean-var",
        TokenKind::Str => "lean-string",
        TokenKind::Option => "lean-option",
        TokenKind::DocComment => "lean-docstring",
        TokenKind::Sort => "lean-sort",
        TokenKind::LevelVar | TokenKind::LevelOp | TokenKind::LevelConst => "lean-level",
        TokenKind::ModuleName => "lean-module",
        TokenKind::WithType => "lean-expr",
        TokenKind::Unknown => "lean-text",
    }
}

/// Hover attributes carried by the kind payload, attribute values escaped
/// exactly like text content.
fn token_data_attrs(kind: &TokenKind) -> String {
    let mut attrs = String::new();

    match kind {
        TokenKind::Const {
            name, signature, ..
        } => {
            if let Some(sig) = signature {
                push_attr(&mut attrs, "data-signature", sig);
            }
            if let Some(name) = name {
                push_attr(&mut attrs, "data-name", name);
            }
        }
        TokenKind::Var { ty: Some(ty) } => {
            push_attr(&mut attrs, "data-type", ty);
        }
        TokenKind::Keyword { docs: Some(docs) } => {
            push_attr(&mut attrs, "data-docs", docs);
        }
        _ => {}
    }

    attrs
}

fn push_attr(attrs: &mut String, name: &str, value: &str) {
    attrs.push(' ');
    attrs.push_str(name);
    attrs.push_str("=\"");
    attrs.push_str(&escape_html(value));
    attrs.push('"');
}

fn render_span(span: &Span) -> String {
    let mut css_class = "lean-span".to_string();
    if let Some(severity) = span.diagnostics.iter().map(|d| d.severity).max() {
        css_class.push_str(" lean-");
        css_class.push_str(severity.as_str());
    }

    let content = render_fragment(&span.content);

    let tooltip = diagnostics_tooltip(&span.diagnostics);
    let title_attr = if tooltip.is_empty() {
        String::new()
    } else {
        format!(" title=\"{}\"", escape_html(&tooltip))
    };

    format!("<span class=\"{css_class}\"{title_attr}>{content}</span>")
}

/// Newline-joined plain text of all diagnostic messages, for tooltips.
fn diagnostics_tooltip(diagnostics: &[Diagnostic]) -> String {
    let messages: Vec<String> = diagnostics
        .iter()
        .map(|d| message_to_text(&d.message))
        .filter(|text| !text.is_empty())
        .collect();

    messages.join("\n")
}

fn render_tactics(tactics: &Tactics) -> String {
    let content = render_fragment(&tactics.content);

    if tactics.goals.is_empty() {
        return format!("<span class=\"lean-tactic\">{content}</span>");
    }

    // The id derives from the source range alone, so re-rendering an
    // identical range is idempotent.
    let goal_id = format!("goal-{}-{}", tactics.start_pos, tactics.end_pos);
    let goals_html = render_goals(&tactics.goals);

    format!(
        "<span class=\"lean-tactic\" data-goals=\"{goal_id}\">{content}</span>\
         <span class=\"lean-goals\" id=\"{goal_id}\" style=\"display:none;\">{goals_html}</span>"
    )
}

/// Render a goal group for the expandable panel.
///
/// Zero goals renders the fixed completion message rather than an empty
/// block.
pub fn render_goals(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "<span class=\"lean-goal-message\">Goals accomplished</span>".to_string();
    }

    goals
        .iter()
        .enumerate()
        .map(|(i, goal)| render_goal(goal, i + 1, goals.len()))
        .collect()
}

/// Render a single goal. `index` is 1-based within a group of `total`.
fn render_goal(goal: &Goal, index: usize, total: usize) -> String {
    let mut parts = Vec::new();

    // Header only for multi-goal groups or named cases.
    if total > 1 {
        let header = match &goal.name {
            Some(name) => format!("case {name} ({index}/{total})"),
            None => format!("goal {index}/{total}"),
        };
        parts.push(format!(
            "<div class=\"lean-goal-header\">{}</div>",
            escape_html(&header)
        ));
    } else if let Some(name) = &goal.name {
        parts.push(format!(
            "<div class=\"lean-goal-header\">case {}</div>",
            escape_html(name)
        ));
    }

    if !goal.hypotheses.is_empty() {
        parts.push("<div class=\"lean-hypotheses\">".to_string());
        for hyp in &goal.hypotheses {
            parts.push(render_hypothesis(hyp));
        }
        parts.push("</div>".to_string());
    }

    parts.push(format!(
        "<div class=\"lean-conclusion\"><span class=\"lean-turnstile\">{}</span>{}</div>",
        escape_html(&goal.prefix),
        render_fragment(&goal.conclusion)
    ));

    format!("<div class=\"lean-goal\">{}</div>", parts.join(""))
}

fn render_hypothesis(hyp: &Hypothesis) -> String {
    let names: Vec<String> = hyp.names.iter().map(render_token).collect();

    format!(
        "<div class=\"lean-hypothesis\">\
         <span class=\"lean-hyp-names\">{}</span>\
         <span class=\"lean-hyp-colon\"> : </span>\
         <span class=\"lean-hyp-type\">{}</span>\
         </div>",
        names.join(" "),
        render_fragment(&hyp.type_and_val)
    )
}

fn render_point(point: &Point) -> String {
    let css_class = format!("lean-point lean-point-{}", point.severity.as_str());

    let message = message_to_text(&point.message);
    if message.is_empty() {
        format!("<span class=\"{css_class}\"></span>")
    } else {
        format!(
            "<span class=\"{css_class}\" title=\"{}\"></span>",
            escape_html(&message)
        )
    }
}

/// The fixed stylesheet for the classes emitted by this renderer.
///
/// Pure accessor: hosts embed this in their page however they assemble it.
pub fn stylesheet() -> &'static str {
    include_str!("../../../css/highlight.css")
}

/// Wrap a rendered fragment in a complete HTML document with embedded CSS.
pub(super) fn wrap_in_document(fragment: &str, options: &HtmlOptions) -> String {
    let baseline_css = stylesheet();
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="subverso-render">
  <title>Highlighted source</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<pre class="lean-code"><code>{fragment}</code></pre>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text and attribute values.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
