//! Tokenizer for inline bold markup using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// The two-character bold marker
pub const MARKER: &str = "**";

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `**` toggles bold
    #[token("**")]
    Marker,

    /// Run of text without asterisks
    #[regex(r"[^*]+")]
    Literal,

    /// A lone `*` is ordinary text
    #[token("*")]
    Star,
}

/// Tokenize markup text
///
/// Every byte of the input belongs to exactly one token, so concatenating
/// the spans reproduces the input.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Literal), span))
}
