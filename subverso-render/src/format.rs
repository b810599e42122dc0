//! Output trait definition
//!
//! This module defines the core Output trait that all output format
//! implementations must implement. The trait provides a uniform interface
//! for rendering a decoded highlighted tree into a textual format.

use crate::error::RenderError;
use crate::ir::nodes::HighlightedNode;
use std::collections::HashMap;

/// Trait for output formats
///
/// Implementors convert a canonical highlighted tree into a string
/// representation (HTML fragment, plain text, tree visualization, ...).
///
/// # Examples
///
/// ```ignore
/// struct MyOutput;
///
/// impl Output for MyOutput {
///     fn name(&self) -> &str {
///         "my-output"
///     }
///
///     fn render(&self, node: &HighlightedNode) -> Result<String, RenderError> {
///         // Render node to string
///         todo!()
///     }
/// }
/// ```
pub trait Output: Send + Sync {
    /// The name of this output format (e.g., "html", "text")
    fn name(&self) -> &str;

    /// Optional description of this output format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this output (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic output selection from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a highlighted tree into this output format
    fn render(&self, node: &HighlightedNode) -> Result<String, RenderError>;

    /// Render a highlighted tree, optionally using extra parameters.
    ///
    /// Outputs without tunable behavior can rely on the default
    /// implementation, which delegates to [`Output::render`] and rejects any
    /// parameters it would silently ignore.
    fn render_with_options(
        &self,
        node: &HighlightedNode,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        if options.is_empty() {
            self.render(node)
        } else {
            Err(RenderError::NotSupported(format!(
                "Output '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
