//! Expansion of parsed brace patterns
//!
//! Every choice is a backtracking point: whatever follows the group has to be
//! expanded once per alternative. Rather than re-walking that suffix from each
//! alternative, the walk carries a [`Continuation`], a record of "what is left to
//! append after the current node", at this nesting level and every enclosing one.
//!
//! Continuations are immutable. Advancing one produces a new record, so all the
//! alternatives of a choice can hold the same `Rc` without seeing each other's
//! progress. Back-links only ever point outward toward the root, so no cycle can
//! form.
//!
//! The depth-first walk runs on an explicit stack of pending branches, so long or
//! wide patterns never deepen the native call stack. Output order is the shell's:
//! alternatives left to right, rightmost group varying fastest.
//!
//!     {a,b}{c,d}   ->   ac ad bc bd

use super::ast::Expr;
use std::iter::FusedIterator;
use std::rc::Rc;

/// Remaining concatenation work: the siblings from `index` on, then `outer`.
#[derive(Debug)]
pub struct Continuation<'a> {
    siblings: &'a [Expr],
    index: usize,
    outer: Option<Rc<Continuation<'a>>>,
}

impl<'a> Continuation<'a> {
    pub fn new(siblings: &'a [Expr], index: usize, outer: Option<Rc<Continuation<'a>>>) -> Self {
        debug_assert!(index < siblings.len());
        Continuation {
            siblings,
            index,
            outer,
        }
    }

    /// The sibling to expand next.
    pub fn current(&self) -> &'a Expr {
        &self.siblings[self.index]
    }

    /// The continuation that applies after [`current`](Self::current).
    ///
    /// At the last sibling this collapses to the enclosing level's continuation.
    pub fn advance(&self) -> Option<Rc<Continuation<'a>>> {
        if self.index + 1 >= self.siblings.len() {
            self.outer.clone()
        } else {
            Some(Rc::new(Continuation {
                siblings: self.siblings,
                index: self.index + 1,
                outer: self.outer.clone(),
            }))
        }
    }
}

/// A branch waiting to be expanded.
struct Frame<'a> {
    prefix: String,
    expr: &'a Expr,
    next: Option<Rc<Continuation<'a>>>,
}

/// Lazily yields every expansion of a tree, in canonical order.
pub struct Expansions<'a> {
    pending: Vec<Frame<'a>>,
}

impl<'a> Expansions<'a> {
    pub fn new(expr: &'a Expr) -> Self {
        Self::with_prefix(expr, String::new())
    }

    /// Start the walk with `prefix` already accumulated.
    pub fn with_prefix(expr: &'a Expr, prefix: impl Into<String>) -> Self {
        Expansions {
            pending: vec![Frame {
                prefix: prefix.into(),
                expr,
                next: None,
            }],
        }
    }
}

impl Iterator for Expansions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let Frame {
            mut prefix,
            mut expr,
            mut next,
        } = self.pending.pop()?;

        loop {
            match expr {
                Expr::Literal(text) => prefix.push_str(text),
                Expr::Choice(alternatives) if !alternatives.is_empty() => {
                    // Later alternatives wait on the stack, first one runs now.
                    for alt in alternatives[1..].iter().rev() {
                        self.pending.push(Frame {
                            prefix: prefix.clone(),
                            expr: alt,
                            next: next.clone(),
                        });
                    }
                    expr = &alternatives[0];
                    continue;
                }
                Expr::Concat(children) if !children.is_empty() => {
                    if children.len() > 1 {
                        next = Some(Rc::new(Continuation::new(children, 1, next)));
                    }
                    expr = &children[0];
                    continue;
                }
                // Empty choice or concatenation contributes nothing.
                Expr::Choice(_) | Expr::Concat(_) => {}
            }

            match next {
                Some(cont) => {
                    expr = cont.current();
                    next = cont.advance();
                }
                None => return Some(prefix),
            }
        }
    }
}

impl FusedIterator for Expansions<'_> {}

/// Expand a tree into all of its strings.
pub fn expand(expr: &Expr) -> Vec<String> {
    Expansions::new(expr).collect()
}
