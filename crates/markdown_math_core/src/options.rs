//! Rendering configuration shared across the recognizer set.
//!
//! Options are constructed explicitly and shared read-only; there is no
//! process-wide default. Unrecognized keys are kept and forwarded verbatim to
//! the rendering engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Options forwarded to the math rendering engine.
///
/// `display_mode` is deliberately absent: the core always derives it from the
/// token and sets it on the [`EngineRequest`](crate::engine::EngineRequest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    /// Whether the engine should report malformed input as an error rather
    /// than rendering it in an error color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throw_on_error: Option<bool>,
    /// Color used for malformed input when `throw_on_error` is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_color: Option<String>,
    /// Macro definitions, name to expansion.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub macros: BTreeMap<String, String>,
    /// Engine strict-mode behavior (boolean or mode name, engine-defined).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<Value>,
    /// Whether to trust input that can execute or link out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust: Option<bool>,
    /// Any other keys, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Configuration for one extension-set instantiation.
///
/// `non_standard` belongs to the core and relaxes the delimiter-boundary
/// rules; everything else is engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MathOptions {
    /// Relaxed delimiter matching: no required whitespace before an inline
    /// `$`, no required boundary after it, optional newlines around block
    /// markers.
    pub non_standard: bool,
    /// Options forwarded to the rendering engine.
    #[serde(flatten)]
    pub engine: EngineOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_config_surface() {
        // The configuration deserializes from the flat shape hosts pass
        // around: core flag and engine keys side by side.
        let options: MathOptions = serde_json::from_str(
            r#"{"nonStandard": true, "throwOnError": false, "trust": true, "output": "mathml"}"#,
        )
        .unwrap();
        assert!(options.non_standard);
        assert_eq!(options.engine.throw_on_error, Some(false));
        assert_eq!(options.engine.trust, Some(true));
        assert_eq!(
            options.engine.extra.get("output"),
            Some(&Value::String("mathml".into()))
        );
    }

    #[test]
    fn test_defaults_are_strict() {
        let options = MathOptions::default();
        assert!(!options.non_standard);
        assert_eq!(options.engine, EngineOptions::default());
    }
}
