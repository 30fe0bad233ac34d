//! Brace pattern expansion
//!
//! A pattern is parsed into an [`Expr`](ast::Expr) tree, which the expander then
//! walks to produce every expansion:
//!
//!     {a,b}{c,g{e,m}}p{q,r}
//!       -> acpq acpr agepq agepr agmpq agmpr bcpq bcpr bgepq bgepr bgmpq bgmpr
//!
//! Modules:
//! - [`parser`]: pattern text to expression tree (permissive)
//! - [`expander`]: expression tree to expansions
//! - [`validation`]: optional strict checks, built on [`lexer`]
//! - [`formats`]: output renderings, looked up by name
//! - [`config`] and [`processor`]: what the command line tool drives

pub mod ast;
pub mod config;
pub mod expander;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod validation;
