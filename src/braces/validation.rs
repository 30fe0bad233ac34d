//! Strict validation of brace patterns
//!
//! [`parse`](crate::braces::parser::parse) accepts every string. Callers that
//! would rather reject sloppy patterns run [`validate`] first; it walks the
//! token stream with a stack of open groups and reports the first problem it
//! finds, with the byte offset of the offending character.
//!
//! Commas outside any group are ordinary text and never an error.

use super::lexer::{tokenize, PatternToken};
use std::fmt;

/// A structural problem found in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// `{` that is never closed. Offset of the `{`.
    UnclosedGroup { offset: usize },
    /// `}` with no open group. Offset of the `}`.
    UnmatchedClose { offset: usize },
    /// `{}`. Offset of the `{`.
    EmptyGroup { offset: usize },
    /// Nothing between two separators, or between a separator and a brace.
    /// Offset of the `,` or `}` that ends the empty alternative.
    EmptyAlternative { offset: usize },
}

impl PatternError {
    pub fn offset(&self) -> usize {
        match self {
            PatternError::UnclosedGroup { offset }
            | PatternError::UnmatchedClose { offset }
            | PatternError::EmptyGroup { offset }
            | PatternError::EmptyAlternative { offset } => *offset,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnclosedGroup { offset } => {
                write!(f, "Unclosed group opened at offset {}", offset)
            }
            PatternError::UnmatchedClose { offset } => {
                write!(f, "Unmatched '}}' at offset {}", offset)
            }
            PatternError::EmptyGroup { offset } => write!(f, "Empty group at offset {}", offset),
            PatternError::EmptyAlternative { offset } => {
                write!(f, "Empty alternative ending at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// An open group while scanning.
struct OpenGroup {
    offset: usize,
    has_comma: bool,
    /// Whether the alternative currently being read has any content.
    alt_has_content: bool,
}

/// Check that a pattern is well formed.
pub fn validate(pattern: &str) -> Result<(), PatternError> {
    let mut open: Vec<OpenGroup> = Vec::new();

    for (token, span) in tokenize(pattern) {
        match token {
            PatternToken::Text => {
                if let Some(group) = open.last_mut() {
                    group.alt_has_content = true;
                }
            }
            PatternToken::Open => open.push(OpenGroup {
                offset: span.start,
                has_comma: false,
                alt_has_content: false,
            }),
            PatternToken::Comma => {
                if let Some(group) = open.last_mut() {
                    if !group.alt_has_content {
                        return Err(PatternError::EmptyAlternative { offset: span.start });
                    }
                    group.has_comma = true;
                    group.alt_has_content = false;
                }
            }
            PatternToken::Close => {
                let group = open
                    .pop()
                    .ok_or(PatternError::UnmatchedClose { offset: span.start })?;
                if !group.alt_has_content {
                    return Err(if group.has_comma {
                        PatternError::EmptyAlternative { offset: span.start }
                    } else {
                        PatternError::EmptyGroup {
                            offset: group.offset,
                        }
                    });
                }
                if let Some(parent) = open.last_mut() {
                    parent.alt_has_content = true;
                }
            }
        }
    }

    match open.pop() {
        Some(group) => Err(PatternError::UnclosedGroup {
            offset: group.offset,
        }),
        None => Ok(()),
    }
}
