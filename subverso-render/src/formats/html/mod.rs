//! HTML output implementation
//!
//! This module renders a highlighted tree to an HTML fragment of nested
//! `<span>` elements with CSS classes and `data-*` attributes carrying the
//! semantic information forward to the browser.
//!
//! # Node Mapping Table
//!
//! | Tree node       | HTML                                                | Notes                                     |
//! |-----------------|-----------------------------------------------------|-------------------------------------------|
//! | Token           | `<span class="lean-<kind>" data-*>…</span>`         | kind → class table below, hover attrs     |
//! | Text            | escaped text                                        | no wrapper                                |
//! | Seq             | children concatenated                               | no separator                              |
//! | Span            | `<span class="lean-span lean-<severity>" title>`    | severity = max of attached diagnostics    |
//! | Tactics         | `<span class="lean-tactic" data-goals>` + panel     | hidden `lean-goals` panel with the state  |
//! | Point           | `<span class="lean-point lean-point-<severity>">`   | zero-width, tooltip only                  |
//! | Unparsed        | escaped text                                        | fallback, no wrapper                      |
//!
//! # CSS Classes
//!
//! Token kinds map to a fixed class table:
//! keyword → `lean-keyword`, const → `lean-const` (plus `lean-def` at a
//! definition site), anonCtor → `lean-const`, var → `lean-var`, str →
//! `lean-string`, option → `lean-option`, docComment → `lean-docstring`,
//! sort → `lean-sort`, levelVar/levelOp/levelConst → `lean-level`,
//! moduleName → `lean-module`, withType → `lean-expr`, anything else →
//! `lean-text`. A token whose trimmed content is the placeholder proof
//! `sorry` renders as `lean-sorry` regardless of its declared kind.
//!
//! # Goals display
//!
//! Tactic blocks with goals emit an adjacent hidden `lean-goals` panel whose
//! id derives from the source range (`goal-<start>-<end>`), so repeated
//! renders of identical ranges produce identical markup. The tactic span
//! references the panel through `data-goals` for the hosting page's
//! expand/collapse script.
//!
//! # Output Modes
//!
//! `render` returns the bare fragment, safe to embed in a block-level
//! container. With `document=true` the fragment is wrapped in a complete
//! HTML5 page with the stylesheet embedded in a `<style>` tag; `custom-css`
//! appends user CSS after the baseline in that mode. The stylesheet itself
//! is exposed through [`stylesheet`] for hosts that assemble their own page.

mod serializer;

pub use serializer::{render_fragment, render_goals, stylesheet};

use crate::error::RenderError;
use crate::format::Output;
use crate::ir::nodes::HighlightedNode;
use std::collections::HashMap;

/// Options for HTML rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete HTML document with embedded CSS
    pub document: bool,
    /// Optional custom CSS appended after the baseline stylesheet
    /// (document mode only)
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self) -> Self {
        self.document = true;
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Output implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlOutput {
    options: HtmlOptions,
}

impl HtmlOutput {
    /// Create an HTML output with the given options
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Output for HtmlOutput {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment with semantic CSS classes"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, node: &HighlightedNode) -> Result<String, RenderError> {
        let fragment = serializer::render_fragment(node);
        if self.options.document {
            Ok(serializer::wrap_in_document(&fragment, &self.options))
        } else {
            Ok(fragment)
        }
    }

    fn render_with_options(
        &self,
        node: &HighlightedNode,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let mut resolved = self.options.clone();
        if let Some(document) = options.get("document") {
            resolved.document = document != "false";
        }
        if let Some(css) = options.get("custom-css") {
            resolved.custom_css = Some(css.clone());
        }

        HtmlOutput::new(resolved).render(node)
    }
}
