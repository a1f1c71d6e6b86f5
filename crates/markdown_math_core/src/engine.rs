//! The math rendering engine seam.
//!
//! The engine itself is external; this module only fixes the contract the
//! renderer binding calls through.

use crate::options::EngineOptions;
use serde::Serialize;

/// A single render request: the shared engine options plus the display-mode
/// flag derived from the token being rendered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineRequest<'a> {
    /// Render as a centered block-level element rather than inline.
    pub display_mode: bool,
    /// Caller-supplied engine options, forwarded verbatim.
    #[serde(flatten)]
    pub options: &'a EngineOptions,
}

/// Deterministic failure reported by the engine on malformed math source.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turns a math source string into presentation output.
///
/// Implementations must be pure with respect to the request: same source and
/// options, same output or the same diagnostic. The recognizer set is shared
/// read-only across documents, so engines must be `Send + Sync`.
pub trait MathEngine: Send + Sync {
    fn render(&self, math_source: &str, request: &EngineRequest<'_>) -> Result<String, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_flat() {
        let options = EngineOptions {
            throw_on_error: Some(true),
            ..Default::default()
        };
        let request = EngineRequest {
            display_mode: true,
            options: &options,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"displayMode": true, "throwOnError": true})
        );
    }
}
