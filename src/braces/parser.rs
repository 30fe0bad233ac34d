//! Recursive-descent parser for brace patterns
//!
//! The parser makes a single forward pass over a byte range of the pattern.
//! Plain runs become literals, and every `{` starts a group whose depth-0 commas
//! split it into alternatives. Each alternative is parsed recursively over its
//! own sub-range, which is where nested groups resolve.
//!
//! Malformed input is never rejected:
//!
//!     `{a,b`     unterminated group, runs to the end of the range
//!     `a}b`      stray `}` is plain text
//!     `{a,,b}`   empty alternative, expands to the empty string
//!     `{abc}`    single alternative, no branching (same as `abc`)
//!
//! Callers that want these reported instead should run
//! [`validate`](crate::braces::validation::validate) first.
//!
//! Offsets are byte offsets. `{`, `}` and `,` are ASCII, so every split point
//! falls on a char boundary.

use super::ast::Expr;
use log::trace;

/// Parse a whole pattern into an expression tree.
pub fn parse(pattern: &str) -> Expr {
    parse_range(pattern, 0, pattern.len())
}

/// Parse the half-open byte range `start..end` of `pattern`.
///
/// # Panics
///
/// Panics if `start > end`. That is a caller bug, never a property of the input.
pub fn parse_range(pattern: &str, start: usize, end: usize) -> Expr {
    assert!(start <= end, "inverted pattern range {}..{}", start, end);

    if start == end {
        return Expr::Literal(String::new());
    }

    let bytes = pattern.as_bytes();
    let mut parts = Vec::new();
    let mut pos = start;

    while pos < end {
        if bytes[pos] == b'{' {
            let (group, next) = parse_group(pattern, pos, end);
            parts.push(group);
            pos = next;
        } else {
            let run_start = pos;
            while pos < end && bytes[pos] != b'{' {
                pos += 1;
            }
            parts.push(Expr::Literal(pattern[run_start..pos].to_string()));
        }
    }

    collapse(parts, Expr::Concat)
}

/// Parse the group opened at `open`. Returns the group's expression and the
/// offset just past its closing brace (or `end` when it never closes).
fn parse_group(pattern: &str, open: usize, end: usize) -> (Expr, usize) {
    let bytes = pattern.as_bytes();
    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut pos = open + 1;
    let mut alt_start = pos;

    while pos < end && (bytes[pos] != b'}' || depth > 0) {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            b',' if depth == 0 => {
                alternatives.push(parse_range(pattern, alt_start, pos));
                alt_start = pos + 1;
            }
            _ => {}
        }
        pos += 1;
    }
    alternatives.push(parse_range(pattern, alt_start, pos));

    let closed = pos < end;
    trace!(
        "group at {}: {} alternative(s), {}",
        open,
        alternatives.len(),
        if closed { "closed" } else { "unterminated" }
    );

    let next = if closed { pos + 1 } else { pos };
    (collapse(alternatives, Expr::Choice), next)
}

/// A single node stands for itself; only two or more get wrapped.
fn collapse(mut nodes: Vec<Expr>, wrap: fn(Vec<Expr>) -> Expr) -> Expr {
    match nodes.len() {
        1 => nodes.remove(0),
        _ => wrap(nodes),
    }
}
