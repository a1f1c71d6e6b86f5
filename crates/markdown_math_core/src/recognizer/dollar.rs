//! Probe scanning for the dollar-delimited families.
//!
//! Both probes share the run-skip rule: when a candidate `$` does not open a
//! full match, the scan jumps past the entire run of consecutive `$` before
//! retrying. Every byte is visited a bounded number of times, so adversarial
//! inputs made of thousands of dollars stay linear.

use math_patterns::{dollar_run_len, match_block_dollar, match_inline_dollar};

/// Earliest offset at which the inline dollar rule might match, or `None` if
/// no `$` in `src` opens inline math.
///
/// Strict mode only considers a `$` at the scan position or right after a
/// space; non-standard mode considers every `$`.
pub(super) fn probe_inline(src: &str, non_standard: bool) -> Option<usize> {
    let mut offset = 0;
    loop {
        let window = &src[offset..];
        let index = window.find('$')?;
        let at_boundary =
            non_standard || index == 0 || window.as_bytes()[index - 1] == b' ';
        if at_boundary && match_inline_dollar(&window[index..], non_standard).is_some() {
            return Some(offset + index);
        }
        offset += index + 1 + dollar_run_len(&window[index + 1..]);
    }
}

/// Earliest offset at which the block dollar rule might match.
///
/// The opener must be a doubled `$` preceded only by whitespace on its line;
/// when the first `$` found fails those quick checks the probe gives up
/// rather than scanning on.
pub(super) fn probe_block(src: &str, non_standard: bool) -> Option<usize> {
    let mut offset = 0;
    loop {
        let window = &src[offset..];
        let index = window.find('$')?;
        if window.as_bytes().get(index + 1) != Some(&b'$') {
            return None;
        }
        let line_start = window[..index].rfind('\n').map(|pos| pos + 1).unwrap_or(0);
        if !window[line_start..index].chars().all(char::is_whitespace) {
            return None;
        }
        if match_block_dollar(&window[index..], non_standard).is_some() {
            return Some(offset + index);
        }
        offset += index + 1 + dollar_run_len(&window[index + 1..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_inline_finds_earliest_candidate() {
        assert_eq!(probe_inline("pay $x+1$ now", false), Some(4));
        assert_eq!(probe_inline("$x+1$", false), Some(0));
    }

    #[test]
    fn test_probe_inline_skips_non_math_dollars() {
        // Neither `$5` nor `$10` closes before the newline; the scan moves
        // on to the real span on the next line.
        assert_eq!(probe_inline("$5 and $10\nbut $x$", false), Some(15));
        assert_eq!(probe_inline("$5 and $10", false), None);
    }

    #[test]
    fn test_probe_inline_body_may_span_literal_dollars() {
        // A dollar amount followed by a closable `$` on the same line is one
        // long span under the reference rule.
        assert_eq!(probe_inline("$5 and $10, but $x$", false), Some(0));
    }

    #[test]
    fn test_probe_inline_requires_leading_space_in_strict_mode() {
        assert_eq!(probe_inline("price$x$ here", false), None);
        assert_eq!(probe_inline("price$x$ here", true), Some(5));
    }

    #[test]
    fn test_probe_inline_unclosed_dollar() {
        assert_eq!(probe_inline("a lone $ sign", false), None);
        assert_eq!(probe_inline("$", false), None);
    }

    #[test]
    fn test_probe_inline_long_runs_terminate() {
        let src = "$".repeat(10_000);
        assert_eq!(probe_inline(&src, false), None);
        assert_eq!(probe_inline(&src, true), None);
    }

    #[test]
    fn test_probe_block_at_line_start() {
        assert_eq!(probe_block("$$\nx+1\n$$", false), Some(0));
        assert_eq!(probe_block("text\n$$\nx\n$$", false), Some(5));
        assert_eq!(probe_block("text\n  $$\nx\n$$", false), Some(7));
    }

    #[test]
    fn test_probe_block_gives_up_mid_line() {
        // The first `$$` sits mid-line, which disqualifies the whole scan.
        assert_eq!(probe_block("a $$x$$\n$$\ny\n$$", false), None);
    }

    #[test]
    fn test_probe_block_gives_up_on_single_dollar() {
        assert_eq!(probe_block("$\nx\n$", false), None);
    }

    #[test]
    fn test_probe_block_long_runs_terminate() {
        let src = "$".repeat(10_000);
        assert_eq!(probe_block(&src, false), None);
    }
}
