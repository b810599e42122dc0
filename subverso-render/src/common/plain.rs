//! Structure-stripping plain-text flattening of the highlighted tree.
//!
//! Both the text output format and the HTML tooltip extraction need the same
//! transform: drop all markup and keep only the visible characters. Keeping
//! it here means the two consumers cannot drift apart.

use crate::ir::nodes::{Goal, HighlightedNode, MessageContents};

/// Flattens a highlighted node to its plain text content.
///
/// Spans and tactic blocks are transparent wrappers, points have no visible
/// text, and unrecognized nodes contribute nothing.
pub fn highlighted_to_text(node: &HighlightedNode) -> String {
    match node {
        HighlightedNode::Token(token) => token.content.clone(),
        HighlightedNode::Text(text) => text.clone(),
        HighlightedNode::Seq(items) => items.iter().map(highlighted_to_text).collect(),
        HighlightedNode::Span(span) => highlighted_to_text(&span.content),
        HighlightedNode::Tactics(tactics) => highlighted_to_text(&tactics.content),
        HighlightedNode::Point(_) => String::new(),
        HighlightedNode::Unparsed(text) => text.clone(),
        HighlightedNode::Empty => String::new(),
    }
}

/// Flattens diagnostic message contents to plain text for tooltips.
///
/// Trace children are indented two spaces on their own lines, and only when
/// the trace is not marked collapsed.
pub fn message_to_text(msg: &MessageContents) -> String {
    match msg {
        MessageContents::Text(text) => text.clone(),
        MessageContents::Append(parts) => parts.iter().map(message_to_text).collect(),
        MessageContents::Goal(goal) => goal_to_text(goal),
        MessageContents::Term(node) => highlighted_to_text(node),
        MessageContents::Trace(trace) => {
            let mut result = message_to_text(&trace.label);
            if !trace.collapsed {
                for child in &trace.children {
                    result.push_str("\n  ");
                    result.push_str(&message_to_text(child));
                }
            }
            result
        }
        MessageContents::Empty => String::new(),
    }
}

/// Formats a goal as plain text: case name, one line per hypothesis, then
/// the conclusion behind its turnstile prefix.
pub fn goal_to_text(goal: &Goal) -> String {
    let mut lines = Vec::new();

    if let Some(name) = &goal.name {
        lines.push(format!("case {name}"));
    }

    for hyp in &goal.hypotheses {
        let names: Vec<&str> = hyp.names.iter().map(|t| t.content.as_str()).collect();
        if names.is_empty() {
            continue;
        }
        lines.push(format!(
            "{} : {}",
            names.join(" "),
            highlighted_to_text(&hyp.type_and_val)
        ));
    }

    lines.push(format!(
        "{}{}",
        goal.prefix,
        highlighted_to_text(&goal.conclusion)
    ));

    lines.join("\n")
}
