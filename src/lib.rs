//! # brace-expand
//!
//! Shell-style brace expansion: `{a,b}{c,d}` expands to `ac ad bc bd`.
//!
//! ```rust,ignore
//! let expr = brace_expand::parse("{a,b}{c,d}");
//! assert_eq!(brace_expand::expand(&expr), ["ac", "ad", "bc", "bd"]);
//! ```
//!
//! Parsing never fails; malformed braces degrade to text or empty branches. See
//! [`braces::validation`] for strict checking.

pub mod braces;

pub use braces::ast::Expr;
pub use braces::expander::{expand, Expansions};
pub use braces::parser::parse;
