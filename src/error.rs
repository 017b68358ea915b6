//! Structured error types for brochure generation.
//!
//! Fatal failures only: JSON parsing, font loading, rendering/serialization,
//! and output I/O. Missing catalog entries, missing assets, transcode
//! failures and QR failures are handled where they occur and never surface
//! here.

use thiserror::Error;

/// The unified error type returned by all public API functions.
#[derive(Debug, Error)]
pub enum ProspektError {
    /// JSON input failed to parse as a submission or catalog.
    #[error("failed to parse input: {source}{}", format_hint(.hint))]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// A font could not be loaded, parsed, or embedded.
    #[error("font error: {0}")]
    Font(String),
    /// A page renderer or the PDF serializer failed.
    #[error("render error: {0}")]
    Render(String),
    /// Reading input or writing the output file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for ProspektError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the expected schema. Check field names and types."
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input — is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        ProspektError::Parse { source: e, hint }
    }
}
