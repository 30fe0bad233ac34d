//! One-call processing of brace patterns
//!
//! Ties the stages together the way the command line tool uses them:
//!
//!     pattern -> (validate, when strict) -> parse -> render in the chosen format
//!
//! ```rust,ignore
//! use brace_expand::braces::config::load_defaults;
//! use brace_expand::braces::processor::process;
//!
//! let config = load_defaults()?;
//! assert_eq!(process("{a,b}{c,d}", &config)?, "ac ad bc bd");
//! ```

use crate::braces::config::BraceConfig;
use crate::braces::formats::{FormatError, FormatRegistry};
use crate::braces::parser::parse;
use crate::braces::validation::{validate, PatternError};
use log::debug;
use once_cell::sync::Lazy;
use std::fmt;

static DEFAULT_FORMATS: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Errors that can occur while processing a pattern
#[derive(Debug)]
pub enum ProcessingError {
    InvalidPattern(PatternError),
    Format(FormatError),
    Config(config::ConfigError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidPattern(e) => write!(f, "Invalid pattern: {}", e),
            ProcessingError::Format(e) => write!(f, "Format error: {}", e),
            ProcessingError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::InvalidPattern(e) => Some(e),
            ProcessingError::Format(e) => Some(e),
            ProcessingError::Config(e) => Some(e),
        }
    }
}

impl From<PatternError> for ProcessingError {
    fn from(err: PatternError) -> Self {
        ProcessingError::InvalidPattern(err)
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Format(err)
    }
}

impl From<config::ConfigError> for ProcessingError {
    fn from(err: config::ConfigError) -> Self {
        ProcessingError::Config(err)
    }
}

/// The registry holding the built-in formats.
pub fn default_formats() -> &'static FormatRegistry {
    &DEFAULT_FORMATS
}

/// Expand `pattern` and render it as configured.
pub fn process(pattern: &str, config: &BraceConfig) -> Result<String, ProcessingError> {
    process_with(pattern, config, default_formats())
}

/// Like [`process`], with a caller-supplied format registry.
pub fn process_with(
    pattern: &str,
    config: &BraceConfig,
    formats: &FormatRegistry,
) -> Result<String, ProcessingError> {
    if config.parsing.strict {
        validate(pattern)?;
    }

    let expr = parse(pattern);
    debug!(
        "pattern {:?}: {} nodes, {} expansions",
        pattern,
        expr.node_count(),
        expr.expansion_count()
    );

    let output = formats.serialize(
        &expr,
        &config.output.format,
        &config.output.format_options(),
    )?;
    Ok(output)
}
