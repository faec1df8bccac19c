//! Splits Markdown source into block segments.
//!
//! Every line of the source becomes one segment, and therefore one block,
//! except for fenced code: the lines from an opening fence up to and including
//! the matching closing fence are joined back into a single multi-line segment
//! so the fenced block is parsed as one unit.
//!
//! An opening fence is a line starting with "```" (an info string such as
//! `rust` may follow, but it cannot contain a backtick, so a one-line code span
//! like "```x```" is not a fence). A closing fence is a line that is exactly "```" once
//! surrounding whitespace is ignored. An opening fence without a closing one is
//! left as ordinary lines.

use crate::styles::CODE_FENCE;

/// Split Markdown source into the segments that become blocks.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let lines: Vec<&str> = markdown
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    join_fenced_blocks(&lines)
}

fn is_opening_fence(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(CODE_FENCE)
        .is_some_and(|info| !info.contains('`'))
}

fn is_closing_fence(line: &str) -> bool {
    line.trim() == CODE_FENCE
}

/// Join each fenced region into one segment, scanning left to right until no
/// fence pair remains.
fn join_fenced_blocks(lines: &[&str]) -> Vec<String> {
    let mut segments = Vec::with_capacity(lines.len());
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        if is_opening_fence(line) {
            let closing = lines[cursor + 1..]
                .iter()
                .position(|candidate| is_closing_fence(candidate))
                .map(|offset| cursor + 1 + offset);

            if let Some(closing) = closing {
                segments.push(lines[cursor..=closing].join("\n"));
                cursor = closing + 1;
                continue;
            }
        }

        segments.push(line.to_string());
        cursor += 1;
    }

    segments
}
