//! Treeviz output for highlighted trees
//!
//! Treeviz is a visual one-node-per-line representation of the decoded
//! tree, used by the CLI's inspect command to see what a payload actually
//! contains before it is rendered.
//!
//! Each line is `<connectors> <icon> <label>`, with the nesting encoded by
//! the connector prefix and labels truncated to keep lines scannable.
//!
//! Icons:
//!     Seq: ☰
//!     Token: ◦
//!     Text: ↵
//!     Unparsed: 𝒱
//!     Span: ⚠
//!     Tactics: ⊢
//!     Point: ●
//!     Empty: ∅
//!
//! Example:
//!
//! ```text
//! ☰ 3 items
//! ├─ ◦ keyword "theorem"
//! ├─ ↵ " foo : True := by"
//! └─ ⊢ 1 goal @ 18-22
//!    └─ ◦ unknown "simp"
//! ```

use crate::error::RenderError;
use crate::format::Output;
use crate::ir::nodes::{HighlightedNode, TokenKind};
use std::collections::HashMap;

const MAX_LABEL: usize = 40;

/// Output implementation for the tree visualization
pub struct TreevizOutput;

impl Output for TreevizOutput {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Tree visualization of the decoded structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn render(&self, node: &HighlightedNode) -> Result<String, RenderError> {
        Ok(to_treeviz_str(node, true))
    }

    fn render_with_options(
        &self,
        node: &HighlightedNode,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let positions = options
            .get("positions")
            .map(|v| v != "false")
            .unwrap_or(true);
        Ok(to_treeviz_str(node, positions))
    }
}

/// Render a highlighted tree as an indented structure listing.
///
/// `show_positions` controls whether tactic blocks print their source range.
pub fn to_treeviz_str(node: &HighlightedNode, show_positions: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {}\n",
        node_icon(node),
        node_label(node, show_positions)
    ));
    let children = node_children(node);
    for (i, child) in children.iter().enumerate() {
        format_node(child, "", i, children.len(), show_positions, &mut output);
    }
    output
}

fn format_node(
    node: &HighlightedNode,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    show_positions: bool,
    output: &mut String,
) {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node_icon(node),
        node_label(node, show_positions)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let children = node_children(node);
    for (i, child) in children.iter().enumerate() {
        format_node(
            child,
            &child_prefix,
            i,
            children.len(),
            show_positions,
            output,
        );
    }
}

fn node_icon(node: &HighlightedNode) -> &'static str {
    match node {
        HighlightedNode::Token(_) => "◦",
        HighlightedNode::Text(_) => "↵",
        HighlightedNode::Seq(_) => "☰",
        HighlightedNode::Span(_) => "⚠",
        HighlightedNode::Tactics(_) => "⊢",
        HighlightedNode::Point(_) => "●",
        HighlightedNode::Unparsed(_) => "𝒱",
        HighlightedNode::Empty => "∅",
    }
}

fn node_label(node: &HighlightedNode, show_positions: bool) -> String {
    match node {
        HighlightedNode::Token(token) => format!(
            "{} {:?}",
            kind_name(&token.kind),
            truncate_label(&token.content)
        ),
        HighlightedNode::Text(text) => format!("{:?}", truncate_label(text)),
        HighlightedNode::Seq(items) => format!("{} items", items.len()),
        HighlightedNode::Span(span) => {
            let severity = span
                .diagnostics
                .iter()
                .map(|d| d.severity)
                .max()
                .map(|s| format!(" (max {})", s.as_str()))
                .unwrap_or_default();
            format!("{} diagnostics{}", span.diagnostics.len(), severity)
        }
        HighlightedNode::Tactics(tactics) => {
            let goals = match tactics.goals.len() {
                1 => "1 goal".to_string(),
                n => format!("{n} goals"),
            };
            if show_positions {
                format!("{goals} @ {}-{}", tactics.start_pos, tactics.end_pos)
            } else {
                goals
            }
        }
        HighlightedNode::Point(point) => format!("point ({})", point.severity.as_str()),
        HighlightedNode::Unparsed(text) => format!("unparsed {:?}", truncate_label(text)),
        HighlightedNode::Empty => "empty".to_string(),
    }
}

fn kind_name(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword { .. } => "keyword",
        TokenKind::Const { .. } => "const",
        TokenKind::AnonCtor => "anonCtor",
        TokenKind::Var { .. } => "var",
        TokenKind::Str => "str",
        TokenKind::Option => "option",
        TokenKind::DocComment => "docComment",
        TokenKind::Sort => "sort",
        TokenKind::LevelVar => "levelVar",
        TokenKind::LevelOp => "levelOp",
        TokenKind::LevelConst => "levelConst",
        TokenKind::ModuleName => "moduleName",
        TokenKind::WithType => "withType",
        TokenKind::Unknown => "unknown",
    }
}

/// Direct children in display order. Tactic goal conclusions show up under
/// the tactic block so proof state is visible in the listing.
fn node_children(node: &HighlightedNode) -> Vec<&HighlightedNode> {
    match node {
        HighlightedNode::Seq(items) => items.iter().collect(),
        HighlightedNode::Span(span) => vec![span.content.as_ref()],
        HighlightedNode::Tactics(tactics) => vec![tactics.content.as_ref()],
        _ => vec![],
    }
}

fn truncate_label(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(MAX_LABEL - 1).collect();
        format!("{truncated}…")
    }
}
