//! Token model for recognized math spans.

use serde::{Deserialize, Serialize};

/// Tokenizer level at which a recognizer is registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Tried while the host tokenizes inline runs of a paragraph.
    Inline,
    /// Tried while the host assembles block-level structure.
    Block,
}

/// Host-facing token kind.
///
/// Note that kind and rendering mode are independent: `$$...$$` found inside
/// a paragraph is an inline-level token rendered in display mode, and the
/// bracket family always emits block tokens even from the inline level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MathTokenKind {
    InlineMath,
    BlockMath,
}

/// The unit produced by a successful consume step.
///
/// Serializes to the host wire shape:
/// `{"type": "inlineMath", "raw": ..., "text": ..., "displayMode": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MathToken {
    #[serde(rename = "type")]
    pub kind: MathTokenKind,
    /// The exact matched source slice. Splicing `raw` back at the match
    /// offset reproduces the input byte-identically; the host relies on this
    /// for position tracking.
    pub raw: String,
    /// The captured math source, surrounding whitespace trimmed.
    pub text: String,
    /// Whether to render as a centered, standalone element. Determined only
    /// by delimiter family and marker length, never by content.
    pub display_mode: bool,
}
