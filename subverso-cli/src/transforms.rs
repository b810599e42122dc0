//! CLI-specific inspect transforms
//!
//! This module defines the transforms available to `subverso inspect`.
//! Each transform decodes the payload and renders the resulting tree in a
//! developer-facing representation.
//!
//! ## Transforms
//!
//! - `tree`:  one-node-per-line structure listing with icons; the default.
//!   Accepts `positions` ("true"/"false") to toggle tactic source ranges.
//! - `plain`: the payload's visible text with all highlighting stripped.
//!
//! Extra parameters arrive via `--extra-<name> [value]` on the command line
//! with the prefix already stripped.

use std::collections::HashMap;

use subverso_render::formats::text::TextOutput;
use subverso_render::formats::treeviz::TreevizOutput;
use subverso_render::Output;

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["tree", "plain"];

/// Decode a payload and apply the named transform.
///
/// `origin` labels the payload in decode errors. `base64` selects the
/// payload encoding.
pub fn execute_transform(
    source: &str,
    origin: &str,
    base64: bool,
    transform: &str,
    params: &HashMap<String, String>,
) -> Result<String, String> {
    let node = if base64 {
        subverso_render::decode_base64(source, origin)
    } else {
        subverso_render::decode(source, origin)
    }
    .map_err(|e| e.to_string())?;

    match transform {
        "tree" => TreevizOutput
            .render_with_options(&node, params)
            .map_err(|e| e.to_string()),
        "plain" => TextOutput.render(&node).map_err(|e| e.to_string()),
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}
