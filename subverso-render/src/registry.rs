//! Output registry for format discovery and selection
//!
//! This module provides a centralized registry for all available output
//! formats. Outputs can be registered and retrieved by name.

use crate::error::RenderError;
use crate::format::Output;
use crate::ir::nodes::HighlightedNode;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = OutputRegistry::new();
/// registry.register(MyOutput);
///
/// let output = registry.get("my-output")?;
/// let html = output.render(&node)?;
/// ```
pub struct OutputRegistry {
    outputs: HashMap<String, Box<dyn Output>>,
}

impl OutputRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        OutputRegistry {
            outputs: HashMap::new(),
        }
    }

    /// Register an output format
    ///
    /// If an output with the same name already exists, it will be replaced.
    pub fn register<O: Output + 'static>(&mut self, output: O) {
        self.outputs
            .insert(output.name().to_string(), Box::new(output));
    }

    /// Get an output format by name
    pub fn get(&self, name: &str) -> Result<&dyn Output, RenderError> {
        self.outputs
            .get(name)
            .map(|o| o.as_ref())
            .ok_or_else(|| RenderError::OutputNotFound(name.to_string()))
    }

    /// Check if an output format exists
    pub fn has(&self, name: &str) -> bool {
        self.outputs.contains_key(name)
    }

    /// List all available output names (sorted)
    pub fn list_outputs(&self) -> Vec<String> {
        let mut names: Vec<_> = self.outputs.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect output format from a filename based on its extension
    ///
    /// Returns the output name if a matching extension is found, or None.
    pub fn detect_output_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for output in self.outputs.values() {
            if output.file_extensions().contains(&extension) {
                return Some(output.name().to_string());
            }
        }

        None
    }

    /// Render a highlighted tree using the named output format
    pub fn render(&self, node: &HighlightedNode, output: &str) -> Result<String, RenderError> {
        let empty = HashMap::new();
        self.render_with_options(node, output, &empty)
    }

    /// Render a highlighted tree using the named output format and options
    pub fn render_with_options(
        &self,
        node: &HighlightedNode,
        output: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let out = self.get(output)?;
        out.render_with_options(node, options)
    }

    /// Create a registry with the default output formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlOutput::default());
        registry.register(crate::formats::text::TextOutput);
        registry.register(crate::formats::treeviz::TreevizOutput);

        registry
    }
}

impl Default for OutputRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
