//! Regex rules for the math delimiter families embedded in markdown text.
//!
//! Each family comes in a strict and a non-standard (relaxed) variant. These
//! rules are conventionally written with a `\1` backreference tying the
//! closing marker to the opening one and with lookarounds guarding the
//! boundaries; the `regex` engine supports neither, so every dollar rule is
//! compiled as a fixed-marker pair (the `$$` pattern is tried before the `$`
//! pattern, which reproduces the greedy `\${1,2}...\1` matching order
//! exactly) and the boundary lookahead is folded into the pattern as a
//! consumed group whose extent is recovered from the capture positions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that may legally follow a strict inline or bracket close
/// marker: whitespace plus Latin and CJK terminal punctuation.
///
/// Kept as a fixed set on purpose; hosts needing a different boundary policy
/// fork this rule layer.
const TERMINAL_BOUNDARY: &str = r"[\s?!.,:？！。，：]";

static INLINE_SINGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\$((?:\\.|[^\\\n])*?(?:\\.|[^\\\n$]))\$(?:{TERMINAL_BOUNDARY}|$)"
    ))
    .unwrap()
});

static INLINE_DOUBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\$\$((?:\\.|[^\\\n])*?(?:\\.|[^\\\n$]))\$\$(?:{TERMINAL_BOUNDARY}|$)"
    ))
    .unwrap()
});

// Non-standard: no trailing boundary required after the close marker.
static INLINE_SINGLE_RELAXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$((?:\\.|[^\\\n])*?(?:\\.|[^\\\n$]))\$").unwrap());

static INLINE_DOUBLE_RELAXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\$((?:\\.|[^\\\n])*?(?:\\.|[^\\\n$]))\$\$").unwrap());

static BLOCK_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\n((?:\\[\s\S]|[^\\])+?)\n\$(?:\n|$)").unwrap());

static BLOCK_DOUBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\$\n((?:\\[\s\S]|[^\\])+?)\n\$\$(?:\n|$)").unwrap());

// Non-standard: the newlines separating the markers from the body may be
// missing.
static BLOCK_SINGLE_RELAXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\n?((?:\\[\s\S]|[^\\])+?)\n?\$(?:\n|$)").unwrap());

static BLOCK_DOUBLE_RELAXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\$\n?((?:\\[\s\S]|[^\\])+?)\n?\$\$(?:\n|$)").unwrap());

static PAREN_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\\\(\s*((?:\\[\s\S]|[^\\\]])+?)\s*\\\)").unwrap());

static BRACKET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\\\[\s*((?:\\[\s\S]|[^\\\]])+?)\s*\\\](?:\n|{TERMINAL_BOUNDARY}|$)"
    ))
    .unwrap()
});

/// A successful match of a dollar-delimited rule at the start of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DollarMatch<'a> {
    /// The captured math body, untrimmed.
    pub body: &'a str,
    /// Length of the raw matched text, marker to marker; excludes any strict
    /// boundary character consumed by the pattern.
    pub raw_len: usize,
    /// A doubled marker means display (centered) rendering.
    pub display: bool,
}

/// A successful match of an escape-delimited rule at the start of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedMatch<'a> {
    /// The captured math body, untrimmed.
    pub body: &'a str,
    /// Length of the raw matched text, including the boundary character the
    /// bracket rule consumes after its close marker.
    pub raw_len: usize,
}

/// Match `$...$` or `$$...$$` at the start of `text`.
///
/// The opening marker must not be followed by a further `$`, which the run
/// length already encodes: a run of one or two dollars selects the
/// corresponding fixed-marker pattern, a longer run can never open inline
/// math.
pub fn match_inline_dollar(text: &str, non_standard: bool) -> Option<DollarMatch<'_>> {
    let marker = match dollar_run_len(text) {
        1 => 1,
        2 => 2,
        _ => return None,
    };
    let re = match (marker, non_standard) {
        (1, false) => &INLINE_SINGLE,
        (2, false) => &INLINE_DOUBLE,
        (1, true) => &INLINE_SINGLE_RELAXED,
        (2, true) => &INLINE_DOUBLE_RELAXED,
        _ => unreachable!(),
    };
    let caps = re.captures(text)?;
    let body = caps.get(1)?;
    Some(DollarMatch {
        body: body.as_str(),
        raw_len: body.end() + marker,
        display: marker == 2,
    })
}

/// Match a dollar block (`$$` or `$` opening and closing on its own line) at
/// the start of `text`. The raw extent includes the trailing newline when one
/// is present.
pub fn match_block_dollar(text: &str, non_standard: bool) -> Option<DollarMatch<'_>> {
    let pairs: [(&Lazy<Regex>, usize); 2] = if non_standard {
        [(&BLOCK_DOUBLE_RELAXED, 2), (&BLOCK_SINGLE_RELAXED, 1)]
    } else {
        [(&BLOCK_DOUBLE, 2), (&BLOCK_SINGLE, 1)]
    };
    for (re, marker) in pairs {
        if let Some(caps) = re.captures(text) {
            let body = caps.get(1)?;
            return Some(DollarMatch {
                body: body.as_str(),
                raw_len: caps.get(0)?.end(),
                display: marker == 2,
            });
        }
    }
    None
}

/// Match `\(...\)` at the start of `text`.
pub fn match_escaped_paren(text: &str) -> Option<EscapedMatch<'_>> {
    let caps = PAREN_INLINE.captures(text)?;
    Some(EscapedMatch {
        body: caps.get(1)?.as_str(),
        raw_len: caps.get(0)?.end(),
    })
}

/// Match `\[...\]` at the start of `text`. The close marker must be followed
/// by a newline, whitespace, terminal punctuation or end of input.
pub fn match_escaped_bracket(text: &str) -> Option<EscapedMatch<'_>> {
    let caps = BRACKET.captures(text)?;
    Some(EscapedMatch {
        body: caps.get(1)?.as_str(),
        raw_len: caps.get(0)?.end(),
    })
}

/// Length of the run of consecutive `$` at the start of `text`.
pub fn dollar_run_len(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b'$').count()
}
