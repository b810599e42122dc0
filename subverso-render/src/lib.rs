//! Rendering for SubVerso highlighted JSON
//!
//!     This crate converts the highlighted JSON trees produced by the SubVerso
//!     highlighter (syntax-highlighted Lean code with semantic and diagnostic
//!     metadata) into output formats suitable for publishing: HTML fragments
//!     with CSS classes and hover attributes, plain text, and an inspection
//!     tree listing.
//!
//!     TLDR: For output authors:
//!         - The decoder owns every wire-format quirk; outputs only ever see the
//!           canonical tree in ./ir/nodes.rs, one shape per constructor.
//!         - Rendering is total: an output must degrade unknown or empty nodes
//!           to empty strings, never fail. Decoding is the only fallible stage.
//!         - Shared flattening logic lives in ./common, so tooltips and the text
//!           output cannot drift apart.
//!         - Each output registers in the OutputRegistry and gets unit tests next
//!           to the code plus integration tests under tests/.
//!
//! Architecture
//!
//!     Single pipeline: decode → canonical tree → output renderer.
//!
//!     The wire format is a tagged union keyed by constructor name with several
//!     redundantly wrapped spellings per constructor. All of that variance is
//!     normalized by the decoder (./ir/from_json.rs) so that the renderers are
//!     a straight recursion over an enum. Renderers build their strings bottom
//!     up, each node escaping its own text and concatenating its children in
//!     document order; there is no shared mutable state, so renders are
//!     deterministic, idempotent, and safe to run concurrently over
//!     independent trees.
//!
//!     This is a pure lib: it powers the subverso CLI but is shell agnostic —
//!     no std printing, no env vars, no path assumptions.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # RenderError
//!     ├── decode.rs               # payload (raw/base64 JSON) → canonical tree
//!     ├── format.rs               # Output trait definition
//!     ├── registry.rs             # OutputRegistry for discovery and selection
//!     ├── publish.rs              # payload-to-string/file convenience pipeline
//!     ├── formats
//!     │   ├── html                # HTML fragment renderer + stylesheet
//!     │   ├── text                # plain-text flattening
//!     │   └── treeviz             # inspection tree listing
//!     ├── ir                      # canonical tree + JSON canonicalization
//!     └── common                  # logic shared by outputs (plain-text core)
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # mods the subdirectories below
//!     ├── decode                  # payload decoding and shape equivalence
//!     ├── html                    # fragment rendering, goals, escaping
//!     └── text                    # message and goal flattening
//!
//!     Note that rust does not by default discover tests in subdirectories, so
//!     we need to include these in the mod.
//!
//! Error Policy
//!
//!     Decode errors (bad base64, invalid UTF-8, malformed JSON) are the only
//!     hard failures and carry the payload's origin label. Everything after a
//!     successful parse is a total function over the tree: unknown constructor
//!     tags, unknown token kinds, and missing optional fields degrade to empty
//!     output or neutral classes. Highlighter formats evolve, and documents
//!     highlighted years ago must keep rendering.
//!
//! Library Choices
//!
//!     serde_json for parsing (the payloads are plain JSON, a hand-rolled
//!     parser would be pure liability), base64 for the transport encoding the
//!     payloads commonly arrive in. Output formats are built by hand because
//!     the fragments are the product: classes, attribute order, and escaping
//!     are contractual, not presentational.

pub mod common;
pub mod decode;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod publish;
pub mod registry;

pub use decode::{decode, decode_base64};
pub use error::RenderError;
pub use format::Output;
pub use registry::OutputRegistry;

use ir::nodes::HighlightedNode;

/// Renders a raw JSON payload to an HTML fragment.
///
/// Convenience wrapper over [`decode`] and the HTML output for hosts that
/// need exactly one call.
pub fn render_highlighted(json: &str, origin: &str) -> Result<String, RenderError> {
    let node = decode(json, origin)?;
    Ok(render_node(&node))
}

/// Renders a base64-encoded JSON payload to an HTML fragment.
pub fn render_highlighted_base64(encoded: &str, origin: &str) -> Result<String, RenderError> {
    let node = decode_base64(encoded, origin)?;
    Ok(render_node(&node))
}

/// Renders an already-decoded tree to an HTML fragment.
pub fn render_node(node: &HighlightedNode) -> String {
    formats::html::render_fragment(node)
}

/// The fixed stylesheet matching the classes emitted by the HTML output.
pub fn stylesheet() -> &'static str {
    formats::html::stylesheet()
}
