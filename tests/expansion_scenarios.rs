//! End-to-end expansion scenarios
//!
//! Each case parses a pattern, expands it, and compares the space-joined output
//! with what `echo` would print for the same pattern.

use brace_expand::{expand, parse};
use rstest::rstest;

fn expand_joined(pattern: &str) -> String {
    expand(&parse(pattern)).join(" ")
}

#[rstest]
#[case::plain("abc", "abc")]
#[case::two_groups("{a,b}{c,d}", "ac ad bc bd")]
#[case::nested(
    "{a,b}{c,g{e,m}}p{q,r}",
    "acpq acpr agepq agepr agmpq agmpr bcpq bcpr bgepq bgepr bgmpq bgmpr"
)]
#[case::prefix_and_suffix("pre{x,y}post", "prexpost preypost")]
#[case::nested_group_as_alternative("{{b,c},{e,f}}{g,h}", "bg bh cg ch eg eh fg fh")]
#[case::three_alternatives("{a,b,c}", "a b c")]
#[case::deep_nesting("{a,b{c,d{e,f}}}", "a bc bde bdf")]
#[case::single_alternative("{abc}", "abc")]
#[case::single_alternative_nested("x{{a,b}}y", "xay xby")]
fn test_scenarios(#[case] pattern: &str, #[case] expected: &str) {
    assert_eq!(expand_joined(pattern), expected);
}

#[rstest]
#[case::unterminated("{a,b", "a b")]
#[case::unterminated_after_text("x{a,b", "xa xb")]
#[case::stray_close("a}b", "a}b")]
#[case::top_level_comma("a,b", "a,b")]
#[case::trailing_open("abc{", "abc")]
fn test_malformed_patterns_degrade(#[case] pattern: &str, #[case] expected: &str) {
    assert_eq!(expand_joined(pattern), expected);
}

#[test]
fn test_empty_input() {
    assert_eq!(expand(&parse("")), vec![String::new()]);
}

#[test]
fn test_empty_alternatives_keep_their_slot() {
    assert_eq!(expand(&parse("a{,b,}c")), vec!["ac", "abc", "ac"]);
    assert_eq!(expand(&parse("{}")), vec![""]);
}

#[test]
fn test_independent_calls_do_not_interfere() {
    let first = parse("{a,b}");
    let second = parse("{c,d}{e,f}");
    assert_eq!(expand(&first), vec!["a", "b"]);
    assert_eq!(expand(&second), vec!["ce", "cf", "de", "df"]);
    assert_eq!(expand(&first), vec!["a", "b"]);
}

#[test]
fn test_threads_expand_separately() {
    let handles: Vec<_> = ["{a,b}", "{1,2}{3,4}", "x{y,z}"]
        .into_iter()
        .map(|pattern| std::thread::spawn(move || expand(&parse(pattern)).join(" ")))
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["a b", "13 14 23 24", "xy xz"]);
}
