//! Payload decoding: raw or base64-encoded JSON → canonical tree.
//!
//! This is the only fallible stage of the pipeline. Base64 decoding
//! failures, UTF-8 failures, and JSON parse failures all surface as
//! [`RenderError::Decode`] carrying the caller-supplied origin label; once a
//! payload parses as JSON, conversion to the canonical tree is total and
//! cannot fail.

use base64::Engine;

use crate::error::RenderError;
use crate::ir::from_json::node_from_value;
use crate::ir::nodes::HighlightedNode;

/// Decodes a raw JSON payload into a canonical highlighted tree.
///
/// `origin` labels the payload in errors (a file name, a document command
/// position) and is never interpreted.
pub fn decode(json: &str, origin: &str) -> Result<HighlightedNode, RenderError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| RenderError::Decode {
            origin: origin.to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;

    Ok(node_from_value(&value))
}

/// Decodes a base64-encoded JSON payload into a canonical highlighted tree.
///
/// Payloads are commonly shipped base64-encoded to survive embedding in
/// markup that would otherwise mangle braces and quotes.
pub fn decode_base64(encoded: &str, origin: &str) -> Result<HighlightedNode, RenderError> {
    let bytes = base64::engine::general_purpose::STANDARD
        // Embedded payloads often pick up incidental whitespace.
        .decode(encoded.trim().as_bytes())
        .map_err(|e| RenderError::Decode {
            origin: origin.to_string(),
            reason: format!("invalid base64: {e}"),
        })?;

    let json = String::from_utf8(bytes).map_err(|e| RenderError::Decode {
        origin: origin.to_string(),
        reason: format!("invalid UTF-8: {e}"),
    })?;

    decode(&json, origin)
}
