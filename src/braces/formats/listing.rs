//! Formats that list the expansions of a pattern

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::braces::ast::Expr;
use crate::braces::expander::{expand, Expansions};

/// Expansions joined by the configured separator, one space by default.
///
/// This is the shell's `echo` rendering: `{a,b}{c,d}` becomes `ac ad bc bd`.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, expr: &Expr, options: &FormatOptions) -> Result<String, FormatError> {
        Ok(expand(expr).join(&options.separator))
    }

    fn description(&self) -> &str {
        "Expansions joined by the separator"
    }
}

/// One expansion per line.
pub struct LinesFormatter;

impl Formatter for LinesFormatter {
    fn name(&self) -> &str {
        "lines"
    }

    fn serialize(&self, expr: &Expr, _options: &FormatOptions) -> Result<String, FormatError> {
        Ok(expand(expr).join("\n"))
    }

    fn description(&self) -> &str {
        "One expansion per line"
    }
}

/// JSON array of expansions.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, expr: &Expr, _options: &FormatOptions) -> Result<String, FormatError> {
        let expansions: Vec<String> = Expansions::new(expr).collect();
        serde_json::to_string(&expansions)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON array of expansions"
    }
}

/// YAML sequence of expansions.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, expr: &Expr, _options: &FormatOptions) -> Result<String, FormatError> {
        let expansions: Vec<String> = Expansions::new(expr).collect();
        let yaml = serde_yaml::to_string(&expansions)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        Ok(yaml.trim_end().to_string())
    }

    fn description(&self) -> &str {
        "YAML sequence of expansions"
    }
}
