//! Property-based tests for parsing and expansion
//!
//! Generated patterns are well formed and carry their expected expansion count,
//! computed while the pattern is built. Expansion order is checked against a
//! naive string-rewriting expander that repeatedly substitutes the leftmost
//! group.

use brace_expand::{expand, parse};
use proptest::prelude::*;

/// Generate well-formed patterns together with their number of expansions
fn pattern_strategy() -> impl Strategy<Value = (String, usize)> {
    let leaf = "[a-z]{1,3}".prop_map(|s| (s, 1usize));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            // A group of one to three alternatives
            prop::collection::vec(inner.clone(), 1..4).prop_map(|alternatives| {
                let count = alternatives.iter().map(|(_, c)| *c).sum::<usize>();
                let body = alternatives
                    .iter()
                    .map(|(s, _)| s.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                (format!("{{{}}}", body), count)
            }),
            // Adjacent parts
            prop::collection::vec(inner, 2..4).prop_map(|parts| {
                let count = parts.iter().map(|(_, c)| *c).product::<usize>();
                let text = parts.iter().map(|(s, _)| s.as_str()).collect::<String>();
                (text, count)
            }),
        ]
    })
}

/// Naive expander: substitute each alternative of the leftmost group, recurse.
/// Only valid for well-formed patterns with non-empty alternatives.
fn reference_expand(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let bytes = pattern.as_bytes();
    let mut depth = 0usize;
    let mut close = open + 1;
    let mut splits = vec![open + 1];
    while close < bytes.len() && (bytes[close] != b'}' || depth > 0) {
        match bytes[close] {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            b',' if depth == 0 => splits.push(close + 1),
            _ => {}
        }
        close += 1;
    }

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut out = Vec::new();
    for (i, start) in splits.iter().enumerate() {
        let end = splits.get(i + 1).map(|next| next - 1).unwrap_or(close);
        let option = &pattern[*start..end];
        out.extend(reference_expand(&format!("{}{}{}", prefix, option, suffix)));
    }
    out
}

#[test]
fn test_reference_expander_sanity() {
    assert_eq!(
        reference_expand("{a,b}{c,g{e,m}}p{q,r}").join(" "),
        "acpq acpr agepq agepr agmpq agmpr bcpq bcpr bgepq bgepr bgmpq bgmpr"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn brace_free_text_expands_to_itself(text in "[^{}]{0,20}") {
        prop_assert_eq!(expand(&parse(&text)), vec![text.clone()]);
    }

    #[test]
    fn single_alternative_group_is_plain_text(text in "[a-z]{0,6}") {
        let pattern = format!("{{{}}}", text);
        prop_assert_eq!(expand(&parse(&pattern)), vec![text.clone()]);
    }

    #[test]
    fn output_length_matches_cardinality((pattern, count) in pattern_strategy()) {
        let expr = parse(&pattern);
        prop_assert_eq!(expr.expansion_count(), count);
        prop_assert_eq!(expand(&expr).len(), count);
    }

    #[test]
    fn output_order_matches_leftmost_substitution((pattern, _) in pattern_strategy()) {
        prop_assert_eq!(expand(&parse(&pattern)), reference_expand(&pattern));
    }

    #[test]
    fn arbitrary_input_never_panics(pattern in "[ab{},]{0,16}") {
        let expr = parse(&pattern);
        prop_assert_eq!(expand(&expr).len(), expr.expansion_count());
    }

    #[test]
    fn rendered_tree_expands_the_same(pattern in "[ab{},]{0,16}") {
        let expr = parse(&pattern);
        let rendered = expr.to_string();
        prop_assert_eq!(expand(&parse(&rendered)), expand(&expr));
    }
}
