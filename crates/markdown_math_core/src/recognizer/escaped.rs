//! Probe scanning shared by the escaped-parenthesis and escaped-bracket
//! families.

/// Earliest offset at which an escape-delimited rule might match.
///
/// Scans for the open character (`(` or `[`); the candidate counts only when
/// the immediately preceding character is a backslash, and a bare open
/// character ends the scan. On a failed
/// full-rule check the scan jumps past the whole run of adjacent escape
/// sequences so adjacent escaped delimiters are visited once.
pub(super) fn probe_escaped(
    src: &str,
    open: u8,
    matches_rule: impl Fn(&str) -> bool,
) -> Option<usize> {
    let mut offset = 0;
    loop {
        let window = &src[offset..];
        let index = window.find(open as char)?;
        if index < 1 || window.as_bytes()[index - 1] != b'\\' {
            return None;
        }
        if matches_rule(&window[index - 1..]) {
            return Some(offset + index - 1);
        }
        offset += index + 1 + escape_run_len(&window[index + 1..], open);
    }
}

/// Length of the run of consecutive `\x` escape pairs at the start of `text`.
fn escape_run_len(text: &str, open: u8) -> usize {
    let bytes = text.as_bytes();
    let mut len = 0;
    while bytes.len() >= len + 2 && bytes[len] == b'\\' && bytes[len + 1] == open {
        len += 2;
    }
    len
}
