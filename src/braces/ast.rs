//! Expression tree for brace patterns
//!
//! A pattern such as `{a,b}x{c,d}` parses into a tree built from exactly three
//! node kinds:
//!
//!     Literal  a run of plain characters                `x`
//!     Choice   a `{..,..}` alternation                  `{a,b}`
//!     Concat   adjacent expressions at the same level   `{a,b}x{c,d}`
//!
//! Each node owns its children outright. Trees are never shared or mutated once
//! the parser hands them out.

use serde::Serialize;
use std::fmt;

/// A node of a parsed brace pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expr {
    /// Plain text. Empty only for empty input or an empty alternative.
    Literal(String),
    /// Ordered alternatives. The parser always produces at least two.
    Choice(Vec<Expr>),
    /// Children evaluated left to right. The parser always produces at least two.
    Concat(Vec<Expr>),
}

impl Expr {
    pub fn literal(text: impl Into<String>) -> Self {
        Expr::Literal(text.into())
    }

    /// Short name of the node kind, as shown by the tree visualizer.
    pub fn node_type(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "Literal",
            Expr::Choice(_) => "Choice",
            Expr::Concat(_) => "Concat",
        }
    }

    /// One-line summary of the node.
    pub fn display_label(&self) -> String {
        match self {
            Expr::Literal(text) => format!("{:?}", text),
            Expr::Choice(alternatives) => format!("{} alternatives", alternatives.len()),
            Expr::Concat(children) => format!("{} parts", children.len()),
        }
    }

    /// Direct children of this node (empty for literals).
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Literal(_) => &[],
            Expr::Choice(children) | Expr::Concat(children) => children,
        }
    }

    /// Number of nodes in the tree rooted here, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Expr::node_count).sum::<usize>()
    }

    /// Number of strings the expander will produce for this tree.
    ///
    /// Computed structurally, without enumerating anything. Saturates at
    /// `usize::MAX` for patterns whose output could never be materialized.
    pub fn expansion_count(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Choice(alternatives) if alternatives.is_empty() => 1,
            Expr::Choice(alternatives) => alternatives
                .iter()
                .fold(0usize, |acc, alt| acc.saturating_add(alt.expansion_count())),
            Expr::Concat(children) => children
                .iter()
                .fold(1usize, |acc, child| acc.saturating_mul(child.expansion_count())),
        }
    }
}

/// Renders the tree back into pattern text.
///
/// The rendering is canonical: single-alternative groups are already gone, and
/// unterminated groups come back closed.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(text) => f.write_str(text),
            Expr::Choice(alternatives) => {
                f.write_str("{")?;
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", alt)?;
                }
                f.write_str("}")
            }
            Expr::Concat(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(alternatives: &[&str]) -> Expr {
        Expr::Choice(alternatives.iter().map(|a| Expr::literal(*a)).collect())
    }

    #[test]
    fn test_display_renders_pattern() {
        let expr = Expr::Concat(vec![
            choice(&["a", "b"]),
            Expr::literal("x"),
            Expr::Choice(vec![
                Expr::literal("c"),
                Expr::Concat(vec![Expr::literal("g"), choice(&["e", "m"])]),
            ]),
        ]);
        assert_eq!(expr.to_string(), "{a,b}x{c,g{e,m}}");
    }

    #[test]
    fn test_expansion_count_adds_alternatives_and_multiplies_parts() {
        // {a,b}{c,g{e,m}}: 2 * (1 + 2)
        let expr = Expr::Concat(vec![
            choice(&["a", "b"]),
            Expr::Choice(vec![
                Expr::literal("c"),
                Expr::Concat(vec![Expr::literal("g"), choice(&["e", "m"])]),
            ]),
        ]);
        assert_eq!(expr.expansion_count(), 6);
        assert_eq!(Expr::literal("abc").expansion_count(), 1);
        assert_eq!(Expr::Choice(vec![]).expansion_count(), 1);
        assert_eq!(Expr::Concat(vec![]).expansion_count(), 1);
    }

    #[test]
    fn test_expansion_count_saturates() {
        let wide = choice(&["a", "b", "c", "d"]);
        let expr = Expr::Concat(vec![wide; 64]);
        assert_eq!(expr.expansion_count(), usize::MAX);
    }

    #[test]
    fn test_node_count() {
        let expr = Expr::Concat(vec![choice(&["a", "b"]), Expr::literal("x")]);
        assert_eq!(expr.node_count(), 5);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_string(&choice(&["a", "b"])).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"choice","value":[{"kind":"literal","value":"a"},{"kind":"literal","value":"b"}]}"#
        );
    }
}
