//! Token-to-output binding between recognizers and the rendering engine.

use crate::engine::{EngineError, EngineRequest, MathEngine};
use crate::options::MathOptions;
use crate::token::MathToken;

/// Error type for rendering operations.
///
/// Recognition failure is never an error (probe/consume return `None`); the
/// only failure here is the engine rejecting an extracted math source, which
/// is surfaced unmodified together with that source. Falling back to raw text
/// is a host policy decision, not taken here.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The engine rejected the extracted math source.
    #[error("math engine failed on {math_source:?}: {source}")]
    Engine {
        math_source: String,
        #[source]
        source: EngineError,
    },
}

/// Render a finalized token.
///
/// Block-rendered output gets a trailing newline so the host's block
/// reassembly does not merge it with following text. Invoked exactly once per
/// finalized token; mutates neither the token nor the options.
pub(crate) fn render_token(
    token: &MathToken,
    options: &MathOptions,
    engine: &dyn MathEngine,
    newline_after: bool,
) -> Result<String, RenderError> {
    let request = EngineRequest {
        display_mode: token.display_mode,
        options: &options.engine,
    };
    let mut output = engine
        .render(&token.text, &request)
        .map_err(|source| RenderError::Engine {
            math_source: token.text.clone(),
            source,
        })?;
    if newline_after {
        output.push('\n');
    }
    Ok(output)
}
