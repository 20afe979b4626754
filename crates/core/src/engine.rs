//! Length-preserving rewriting of matched spans.

use regex::Regex;

use crate::policy::MaskPolicy;

/// Mask every match of `pattern` in `input` according to `policy`.
///
/// The scan walks matches leftmost-first without overlap, resuming
/// immediately after each match end. Unmatched spans are copied verbatim and
/// every byte of a matched span becomes the policy's fill character, so the
/// output always has the input's byte length. Zero matches returns the input
/// unchanged, including the empty input.
pub fn apply(pattern: &Regex, input: &str, policy: MaskPolicy) -> String {
    let fill = policy.fill_char();
    let mut output = String::with_capacity(input.len());
    let mut tail = 0;

    for found in pattern.find_iter(input) {
        // Spans are clamped to the input bounds and to the scan position, so
        // a misreported span can never push writes past either.
        let start = found.start().min(input.len()).max(tail);
        let end = found.end().min(input.len()).max(start);

        output.push_str(&input[tail..start]);
        for _ in start..end {
            output.push(fill);
        }
        tail = end;
    }
    output.push_str(&input[tail..]);

    output
}
