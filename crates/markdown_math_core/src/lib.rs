//! Core library for recognizing embedded math inside markdown documents.
//!
//! A host markdown tokenizer drives this crate through a two-phase extension
//! protocol: a non-committing `probe` that reports the earliest offset at
//! which a recognizer might match, and a `consume` that performs the full
//! match at the current position and emits a [`MathToken`]. Five recognizers
//! cover the delimiter families (`$`/`$$` inline, `$$` block, `\(...\)`
//! inline, `\[...\]` block and mid-paragraph), composed as a named set over
//! one shared read-only configuration.
//!
//! The host markdown grammar and the math rendering engine are both external:
//! the former calls into the recognizers, the latter is reached through the
//! [`MathEngine`] trait.
//!
//! # Modules
//!
//! - [`token`] - Token model and tokenizer levels
//! - [`options`] - Rendering configuration shared by the recognizer set
//! - [`engine`] - The rendering engine seam
//! - [`recognizer`] - The five recognizers and their composition
//! - [`render`] - Token-to-output binding

pub mod engine;
pub mod options;
pub mod recognizer;
pub mod render;
pub mod token;

// Re-export commonly used types at crate root
pub use engine::{EngineError, EngineRequest, MathEngine};
pub use options::{EngineOptions, MathOptions};
pub use recognizer::{MathExtensionSet, MathRecognizer};
pub use render::RenderError;
pub use token::{Level, MathToken, MathTokenKind};
