//! Payload publishing pipeline.
//!
//! Provides a high-level API for turning an encoded payload into rendered
//! output. This module bridges the gap between the output registry and file
//! I/O, handling both in-memory and file-based results.
//!
//! Use this for host commands like "render this payload to HTML" where you
//! want a single call that handles decoding, output selection, rendering,
//! and optional file writing.
//!
//! For more control over the pipeline, use [`decode`](crate::decode) and
//! [`OutputRegistry`] directly. Callers that already hold pre-rendered HTML
//! simply skip this pipeline; it always renders the payload it is handed.

use crate::error::RenderError;
use crate::registry::OutputRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// How a payload string is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadEncoding {
    /// The payload is a raw JSON document.
    #[default]
    Raw,
    /// The payload is base64-encoded JSON.
    Base64,
}

/// Specifies how to render a payload.
///
/// Use the builder pattern to configure the operation:
///
/// ```ignore
/// let spec = RenderSpec::new(payload, "html")
///     .with_origin("chapter2.tex:137")
///     .with_encoding(PayloadEncoding::Base64)
///     .with_output_path("proof.html");
/// ```
///
/// If no output path is provided, the rendered string is returned in memory.
#[derive(Debug)]
pub struct RenderSpec<'a> {
    /// The encoded payload to render.
    pub payload: &'a str,
    /// Target output name (e.g., "html", "text").
    pub output_format: &'a str,
    /// How the payload is encoded.
    pub encoding: PayloadEncoding,
    /// Label identifying the payload in decode errors.
    pub origin: String,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Output-specific options (e.g., document wrapping, custom CSS).
    pub options: HashMap<String, String>,
}

impl<'a> RenderSpec<'a> {
    /// Creates a new render specification for the given payload and output.
    pub fn new(payload: &'a str, output_format: &'a str) -> Self {
        Self {
            payload,
            output_format,
            encoding: PayloadEncoding::Raw,
            origin: "<payload>".to_string(),
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the payload encoding.
    pub fn with_encoding(mut self, encoding: PayloadEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the origin label carried by decode errors.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds an output-specific option (e.g., document wrapping).
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The result of a successful render operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderArtifact {
    /// Content held in memory (no output path was given).
    InMemory(String),
    /// Path to the written file (when an output path was specified).
    File(PathBuf),
}

/// Renders a payload according to the specification.
///
/// Decodes the payload, renders it with the named output from the default
/// registry, and returns the string or writes the file.
///
/// # Errors
///
/// Returns [`RenderError`] if:
/// - The payload does not decode (bad base64, UTF-8, or JSON)
/// - The output format is unknown or rejects the options
/// - File I/O fails
pub fn publish(spec: RenderSpec<'_>) -> Result<RenderArtifact, RenderError> {
    let node = match spec.encoding {
        PayloadEncoding::Raw => crate::decode(spec.payload, &spec.origin)?,
        PayloadEncoding::Base64 => crate::decode_base64(spec.payload, &spec.origin)?,
    };

    let registry = OutputRegistry::with_defaults();
    let rendered = registry.render_with_options(&node, spec.output_format, &spec.options)?;

    match spec.output {
        Some(path) => {
            fs::write(&path, &rendered)
                .map_err(|err| RenderError::Serialization(err.to_string()))?;
            Ok(RenderArtifact::File(path))
        }
        None => Ok(RenderArtifact::InMemory(rendered)),
    }
}
