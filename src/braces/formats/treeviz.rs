//! Treeviz formatter for expression trees
//!
//! One line per node, with the nesting drawn as box connectors:
//!
//!     Concat: 2 parts
//!     ├─ Choice: 2 alternatives
//!     │ ├─ Literal: "a"
//!     │ └─ Literal: "b"
//!     └─ Literal: "x"
//!
//! Labels are truncated to 30 characters.

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::braces::ast::Expr;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(expr: &Expr) -> String {
    let mut lines = vec![format!(
        "{}: {}",
        expr.node_type(),
        truncate(&expr.display_label(), 30)
    )];
    append_children(&mut lines, expr.children(), "");
    lines.join("\n")
}

fn append_node(lines: &mut Vec<String>, expr: &Expr, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    lines.push(format!(
        "{}{} {}: {}",
        prefix,
        connector,
        expr.node_type(),
        truncate(&expr.display_label(), 30)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(lines, expr.children(), &new_prefix);
}

fn append_children(lines: &mut Vec<String>, children: &[Expr], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        append_node(lines, child, prefix, i == children.len() - 1);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "ast-treeviz"
    }

    fn serialize(&self, expr: &Expr, _options: &FormatOptions) -> Result<String, FormatError> {
        Ok(to_treeviz_str(expr))
    }

    fn description(&self) -> &str {
        "One line per expression node"
    }
}
