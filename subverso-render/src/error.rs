//! Error types for decode and render operations

use std::fmt;

/// Errors that can occur while decoding a payload or producing output
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The payload could not be decoded (bad base64, invalid UTF-8, or
    /// malformed JSON). `origin` identifies the payload for diagnostics.
    Decode { origin: String, reason: String },
    /// Error while producing or writing output
    Serialization(String),
    /// Output format not found in registry
    OutputNotFound(String),
    /// Output format does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Decode { origin, reason } => {
                write!(f, "Failed to decode payload from {origin}: {reason}")
            }
            RenderError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            RenderError::OutputNotFound(name) => write!(f, "Output format '{name}' not found"),
            RenderError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
