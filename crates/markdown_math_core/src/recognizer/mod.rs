//! The five delimiter recognizers and their composition.
//!
//! A recognizer is a value implementing the host extension protocol - a
//! level, a probe, a consume and a render - not a trait hierarchy. The host
//! guarantees it only calls [`MathRecognizer::consume`] at a position where
//! the probe returned `0`, and re-probes before every consume attempt.

mod dollar;
mod escaped;

use crate::engine::MathEngine;
use crate::options::MathOptions;
use crate::render::{render_token, RenderError};
use crate::token::{Level, MathToken, MathTokenKind};
use math_patterns::{
    match_block_dollar, match_escaped_bracket, match_escaped_paren, match_inline_dollar,
};
use std::sync::Arc;

/// Which delimiter family a recognizer implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    /// `$...$` and `$$...$$` inside a line.
    DollarInline,
    /// `$$` (or `$`) opening and closing on its own line.
    DollarBlock,
    /// `\(...\)`, always inline rendering.
    ParenInline,
    /// `\[...\]` as a block.
    BracketBlock,
    /// `\[...\]` registered at the inline level so display math can sit
    /// mid-paragraph; still rendered as a block.
    BracketInline,
}

/// One delimiter recognizer registered with the host tokenizer.
#[derive(Debug, Clone)]
pub struct MathRecognizer {
    name: &'static str,
    level: Level,
    family: Family,
    options: Arc<MathOptions>,
}

impl MathRecognizer {
    /// Stable name the recognizer is registered under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tokenizer level the recognizer is tried at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Earliest offset in `src` at which this recognizer might match, without
    /// committing to a match. `None` means nowhere in `src`.
    pub fn probe(&self, src: &str) -> Option<usize> {
        let non_standard = self.options.non_standard;
        match self.family {
            Family::DollarInline => dollar::probe_inline(src, non_standard),
            Family::DollarBlock => dollar::probe_block(src, non_standard),
            Family::ParenInline => {
                escaped::probe_escaped(src, b'(', |text| match_escaped_paren(text).is_some())
            }
            Family::BracketBlock | Family::BracketInline => {
                escaped::probe_escaped(src, b'[', |text| match_escaped_bracket(text).is_some())
            }
        }
    }

    /// Attempt a full match at the start of `src` and emit a token.
    pub fn consume(&self, src: &str) -> Option<MathToken> {
        let non_standard = self.options.non_standard;
        match self.family {
            Family::DollarInline => {
                let m = match_inline_dollar(src, non_standard)?;
                Some(token(MathTokenKind::InlineMath, src, m.raw_len, m.body, m.display))
            }
            Family::DollarBlock => {
                let m = match_block_dollar(src, non_standard)?;
                Some(token(MathTokenKind::BlockMath, src, m.raw_len, m.body, m.display))
            }
            Family::ParenInline => {
                let m = match_escaped_paren(src)?;
                Some(token(MathTokenKind::InlineMath, src, m.raw_len, m.body, false))
            }
            Family::BracketBlock | Family::BracketInline => {
                let m = match_escaped_bracket(src)?;
                Some(token(MathTokenKind::BlockMath, src, m.raw_len, m.body, true))
            }
        }
    }

    /// Render a finalized token through `engine`. Display-rendered families
    /// append a trailing newline to keep the host from merging the output
    /// with following text.
    pub fn render(&self, token: &MathToken, engine: &dyn MathEngine) -> Result<String, RenderError> {
        render_token(token, &self.options, engine, self.newline_after())
    }

    fn newline_after(&self) -> bool {
        matches!(
            self.family,
            Family::DollarBlock | Family::BracketBlock | Family::BracketInline
        )
    }
}

fn token(
    kind: MathTokenKind,
    src: &str,
    raw_len: usize,
    body: &str,
    display_mode: bool,
) -> MathToken {
    MathToken {
        kind,
        raw: src[..raw_len].to_string(),
        text: body.trim().to_string(),
        display_mode,
    }
}

/// The five recognizers composed over one shared configuration.
///
/// Construction is cheap; the set and its options are immutable and
/// `Send + Sync`, so one set can serve concurrent tokenization of independent
/// documents.
#[derive(Debug, Clone)]
pub struct MathExtensionSet {
    options: Arc<MathOptions>,
    recognizers: Vec<MathRecognizer>,
}

impl MathExtensionSet {
    pub fn new(options: MathOptions) -> Self {
        let options = Arc::new(options);
        let recognizer = |name, level, family| MathRecognizer {
            name,
            level,
            family,
            options: Arc::clone(&options),
        };
        let recognizers = vec![
            recognizer("inline_math", Level::Inline, Family::DollarInline),
            recognizer("block_math", Level::Block, Family::DollarBlock),
            recognizer("inline_math_paren", Level::Inline, Family::ParenInline),
            recognizer("block_math_bracket", Level::Block, Family::BracketBlock),
            recognizer("inline_math_bracket", Level::Inline, Family::BracketInline),
        ];
        tracing::debug!(
            non_standard = options.non_standard,
            recognizers = recognizers.len(),
            "Built math extension set"
        );
        Self {
            options,
            recognizers,
        }
    }

    /// The shared configuration.
    pub fn options(&self) -> &MathOptions {
        &self.options
    }

    /// All recognizers, in registration order.
    pub fn recognizers(&self) -> impl Iterator<Item = &MathRecognizer> {
        self.recognizers.iter()
    }

    /// Look up a recognizer by its registered name.
    pub fn get(&self, name: &str) -> Option<&MathRecognizer> {
        self.recognizers.iter().find(|r| r.name == name)
    }

    /// Minimal host loop: walk `src`, let the earliest-probing recognizer
    /// consume, and collect `(offset, token)` pairs.
    ///
    /// This is not a markdown parser; it exists for hosts and tests that only
    /// need math extraction from plain text. Offset ties go to registration
    /// order.
    pub fn scan(&self, src: &str) -> Vec<(usize, MathToken)> {
        let mut found = Vec::new();
        let mut pos = 0;
        while pos < src.len() {
            let rest = &src[pos..];
            let Some((recognizer, index)) = self
                .recognizers
                .iter()
                .filter_map(|r| r.probe(rest).map(|i| (r, i)))
                .min_by_key(|(_, i)| *i)
            else {
                break;
            };
            match recognizer.consume(&rest[index..]) {
                Some(token) => {
                    let raw_len = token.raw.len();
                    tracing::trace!(
                        offset = pos + index,
                        recognizer = recognizer.name,
                        "Consumed math token"
                    );
                    found.push((pos + index, token));
                    pos += index + raw_len;
                }
                None => {
                    // A probe hit that fails to consume cannot happen for
                    // these recognizers; skip one char to guarantee progress.
                    let skip = rest[index..].chars().next().map_or(1, char::len_utf8);
                    pos += index + skip;
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> MathExtensionSet {
        MathExtensionSet::new(MathOptions::default())
    }

    #[test]
    fn test_registration_names_and_levels() {
        let set = strict();
        let listed: Vec<_> = set.recognizers().map(|r| (r.name(), r.level())).collect();
        assert_eq!(
            listed,
            vec![
                ("inline_math", Level::Inline),
                ("block_math", Level::Block),
                ("inline_math_paren", Level::Inline),
                ("block_math_bracket", Level::Block),
                ("inline_math_bracket", Level::Inline),
            ]
        );
        assert!(set.get("block_math_bracket").is_some());
        assert!(set.get("unknown").is_none());
    }

    #[test]
    fn test_inline_dollar_consume() {
        let set = strict();
        let token = set.get("inline_math").unwrap().consume("$x+1$").unwrap();
        assert_eq!(token.kind, MathTokenKind::InlineMath);
        assert_eq!(token.raw, "$x+1$");
        assert_eq!(token.text, "x+1");
        assert!(!token.display_mode);
    }

    #[test]
    fn test_double_dollar_inline_is_display() {
        let set = strict();
        let token = set.get("inline_math").unwrap().consume("$$x+1$$").unwrap();
        assert_eq!(token.kind, MathTokenKind::InlineMath);
        assert!(token.display_mode);
    }

    #[test]
    fn test_block_dollar_consume() {
        let set = strict();
        let token = set.get("block_math").unwrap().consume("$$\nx+1\n$$").unwrap();
        assert_eq!(token.kind, MathTokenKind::BlockMath);
        assert_eq!(token.raw, "$$\nx+1\n$$");
        assert_eq!(token.text, "x+1");
        assert!(token.display_mode);
    }

    #[test]
    fn test_paren_consume_is_inline() {
        let set = strict();
        let token = set
            .get("inline_math_paren")
            .unwrap()
            .consume(r"\(x+1\)")
            .unwrap();
        assert_eq!(token.kind, MathTokenKind::InlineMath);
        assert!(!token.display_mode);
    }

    #[test]
    fn test_bracket_consume_is_display_at_both_levels() {
        let set = strict();
        for name in ["block_math_bracket", "inline_math_bracket"] {
            let token = set.get(name).unwrap().consume(r"\[x+1\]").unwrap();
            assert_eq!(token.kind, MathTokenKind::BlockMath);
            assert_eq!(token.text, "x+1");
            assert!(token.display_mode);
        }
    }

    #[test]
    fn test_consume_trims_body_whitespace() {
        let set = strict();
        let token = set.get("inline_math").unwrap().consume("$ x+1 $").unwrap();
        assert_eq!(token.text, "x+1");
        assert_eq!(token.raw, "$ x+1 $");
    }

    #[test]
    fn test_unmatched_input_consumes_nothing() {
        let set = strict();
        for name in [
            "inline_math",
            "block_math",
            "inline_math_paren",
            "block_math_bracket",
        ] {
            assert_eq!(set.get(name).unwrap().consume("no math here"), None);
        }
    }

    #[test]
    fn test_set_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MathExtensionSet>();
        assert_send_sync::<MathRecognizer>();
    }
}
