//! Byte-level tokenizer for license expressions.
//!
//! Scanning works one byte at a time. Identifier runs are ASCII-only, so any
//! byte of a multi-byte UTF-8 sequence falls outside every class and is
//! reported as its own [`TokenKind::Illegal`] token.

use std::iter::FusedIterator;

use crate::token::{Token, TokenKind, lookup_ident};

/// Stateful tokenizer over a single input string.
///
/// A tokenizer cannot be rewound; lexing a new input needs a new instance.
/// Once the input is exhausted every call to [`next_token`](Self::next_token)
/// returns [`TokenKind::EndOfInput`].
///
/// # Examples
/// ```
/// use license_expr::{TokenKind, Tokenizer};
/// let mut tokenizer = Tokenizer::new("MIT or Apache-2.0");
/// assert_eq!(tokenizer.next_token().literal, "MIT");
/// assert_eq!(tokenizer.next_token().kind, TokenKind::Or);
/// assert_eq!(tokenizer.next_token().literal, "Apache-2.0");
/// assert!(tokenizer.next_token().is_end());
/// assert!(tokenizer.next_token().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    input: String,
    pos: usize,
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'+' | b'-')
}

impl Tokenizer {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            pos: 0,
        }
    }

    /// Byte offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(&b) = self.input.as_bytes().get(self.pos) else {
            return Token::end_of_input();
        };

        let token = match b {
            b'(' => self.single(TokenKind::OpenParen, b),
            b')' => self.single(TokenKind::CloseParen, b),
            b'{' => self.single(TokenKind::OpenBrace, b),
            b'}' => self.single(TokenKind::CloseBrace, b),
            b if is_ident_byte(b) => self.identifier(),
            _ => {
                log::debug!("illegal byte {b:#04x} at offset {}", self.pos);
                self.single(TokenKind::Illegal, b)
            }
        };
        log::trace!("token {} {:?}", token.kind, token.literal);
        token
    }

    fn skip_whitespace(&mut self) {
        while self
            .input
            .as_bytes()
            .get(self.pos)
            .is_some_and(|&b| is_whitespace(b))
        {
            self.pos += 1;
        }
    }

    fn single(&mut self, kind: TokenKind, b: u8) -> Token {
        self.pos += 1;
        Token::new(kind, char::from(b))
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos;
        while self
            .input
            .as_bytes()
            .get(self.pos)
            .is_some_and(|&b| is_ident_byte(b))
        {
            self.pos += 1;
        }
        // Identifier bytes are ASCII, so the run always sits on char boundaries.
        let literal = self.input.get(start..self.pos).unwrap_or_default();
        Token::new(lookup_ident(literal), literal)
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}

impl FusedIterator for Tokenizer {}
