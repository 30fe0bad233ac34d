//! Output formats for expansions and expression trees
//!
//! This module contains the format implementations used to render a parsed
//! pattern:
//! - Expansion listings (text, lines, json, yaml)
//! - Tree views of the expression itself (ast-json, ast-treeviz, pattern)

pub mod listing;
pub mod registry;
pub mod tree;
pub mod treeviz;

pub use listing::{JsonFormatter, LinesFormatter, TextFormatter, YamlFormatter};
pub use registry::{FormatError, FormatOptions, FormatRegistry, Formatter};
pub use tree::{AstJsonFormatter, PatternFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
