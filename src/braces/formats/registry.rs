//! Format registry for expansion output
//!
//! This module provides a pluggable registry of output formats. Each format
//! implements the `Formatter` trait and is looked up by name.

use crate::braces::ast::Expr;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Knobs shared by all formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Placed between expansions by the `text` format.
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            separator: " ".to_string(),
        }
    }
}

/// Trait for output formatters
///
/// Implementors render a parsed pattern (or its expansions) to a string.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "text", "ast-treeviz")
    fn name(&self) -> &str;

    /// Render a parsed pattern in this format
    fn serialize(&self, expr: &Expr, options: &FormatOptions) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of formatters
///
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render a parsed pattern using the named format
    pub fn serialize(
        &self,
        expr: &Expr,
        format: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(expr, options)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TextFormatter);
        registry.register(super::LinesFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::AstJsonFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::PatternFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
