//! Token kinds produced by the tokenizer and the keyword table.

use std::fmt;

/// Literal carried by every [`TokenKind::EndOfInput`] token.
pub const END_OF_INPUT_LITERAL: &str = "\0";

/// Category of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of identifier bytes that is not an operator keyword.
    Identifier,
    /// The `AND` keyword in any casing.
    And,
    /// The `OR` keyword in any casing.
    Or,
    /// `(`
    OpenParen,
    /// `{`
    OpenBrace,
    /// `)`
    CloseParen,
    /// `}`
    CloseBrace,
    /// The input is exhausted.
    EndOfInput,
    /// A single byte outside every recognised class.
    Illegal,
}

impl TokenKind {
    /// Return a short label for the kind, used in log output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "IDENT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::OpenParen => "(",
            Self::OpenBrace => "{",
            Self::CloseParen => ")",
            Self::CloseBrace => "}",
            Self::EndOfInput => "EOF",
            Self::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token and the exact source text it was built from.
///
/// # Examples
/// ```
/// use license_expr::{Token, TokenKind};
/// let token = Token::new(TokenKind::Identifier, "MIT");
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.literal, "MIT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Category of the token.
    pub kind: TokenKind,
    /// Source text matched by the token.
    pub literal: String,
}

impl Token {
    /// Create a token from a kind and its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Create the terminal end-of-input token.
    #[must_use]
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, END_OF_INPUT_LITERAL)
    }

    /// Return `true` when the token marks the end of the input.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

const KEYWORDS: [(&str, TokenKind); 2] = [("AND", TokenKind::And), ("OR", TokenKind::Or)];

/// Classify an identifier run, mapping `and`/`or` in any casing to operators.
///
/// # Examples
/// ```
/// use license_expr::{TokenKind, lookup_ident};
/// assert_eq!(lookup_ident("Or"), TokenKind::Or);
/// assert_eq!(lookup_ident("GPLv2+"), TokenKind::Identifier);
/// ```
#[must_use]
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(ident))
        .map_or(TokenKind::Identifier, |&(_, kind)| kind)
}
