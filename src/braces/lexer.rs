//! Token definitions for brace patterns
//!
//! Only three characters are structural. Everything between them is a `Text`
//! run. The parser does not need tokens (it scans bytes directly); the token
//! stream exists for strict validation, which wants spans for its diagnostics.
use logos::Logos;

/// Tokens of a brace pattern.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PatternToken {
    #[token("{")]
    Open,
    #[token("}")]
    Close,
    #[token(",")]
    Comma,
    // Anything that is not structural
    #[regex(r"[^\{\},]+")]
    Text,
}

/// Tokenize a pattern, keeping each token's byte span.
pub fn tokenize(pattern: &str) -> Vec<(PatternToken, logos::Span)> {
    let mut lexer = PatternToken::lexer(pattern);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
