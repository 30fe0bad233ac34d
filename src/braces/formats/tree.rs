//! Formats that show the parsed expression rather than its expansions

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::braces::ast::Expr;

/// The expression tree as pretty-printed JSON.
pub struct AstJsonFormatter;

impl Formatter for AstJsonFormatter {
    fn name(&self) -> &str {
        "ast-json"
    }

    fn serialize(&self, expr: &Expr, _options: &FormatOptions) -> Result<String, FormatError> {
        serde_json::to_string_pretty(expr)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Expression tree as JSON"
    }
}

/// The canonical pattern text of the tree.
pub struct PatternFormatter;

impl Formatter for PatternFormatter {
    fn name(&self) -> &str {
        "pattern"
    }

    fn serialize(&self, expr: &Expr, _options: &FormatOptions) -> Result<String, FormatError> {
        Ok(expr.to_string())
    }

    fn description(&self) -> &str {
        "Canonical pattern re-rendered from the tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braces::parser::parse;

    #[test]
    fn test_pattern_normalizes() {
        let out = PatternFormatter
            .serialize(&parse("{{a}}{b,c"), &FormatOptions::default())
            .unwrap();
        assert_eq!(out, "a{b,c}");
    }

    #[test]
    fn test_ast_json_is_pretty() {
        let out = AstJsonFormatter
            .serialize(&parse("{a,b}"), &FormatOptions::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "choice");
        assert_eq!(value["value"][1]["value"], "b");
        assert!(out.contains('\n'));
    }
}
