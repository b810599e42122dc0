//! Plain-text output implementation
//!
//! Renders the highlighted tree with all markup stripped: token contents
//! and text runs concatenated in document order, spans and tactic blocks
//! transparent, points invisible. The heavy lifting lives in
//! [`crate::common::plain`], which the HTML output also uses for tooltips.

use crate::common::plain::highlighted_to_text;
use crate::error::RenderError;
use crate::format::Output;
use crate::ir::nodes::HighlightedNode;

/// Output implementation for plain text
pub struct TextOutput;

impl Output for TextOutput {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with all highlighting stripped"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn render(&self, node: &HighlightedNode) -> Result<String, RenderError> {
        Ok(highlighted_to_text(node))
    }
}
