//! Single-pass parser building expression trees from a token stream.
//!
//! Groups are handled with an explicit stack of frames rather than recursion,
//! so nesting depth is bounded only by memory.

mod builder;

use std::fmt;

use crate::errors::ParseError;
use crate::expression::{ExpressionChain, Operator};
use crate::lexer::Tokenizer;
use crate::render::{NormalizeFn, render};
use crate::token::TokenKind;

use builder::{Bracket, TreeBuilder};

/// Builds an [`ExpressionChain`] from a [`Tokenizer`].
///
/// # Examples
/// ```
/// use license_expr::{Parser, Tokenizer};
/// let mut parser = Parser::new(Tokenizer::new("Public Domain"))
///     .register_normalize_fn(|name| match name {
///         "Public Domain" => "Unlicense".to_owned(),
///         other => other.to_owned(),
///     });
/// let chain = parser.parse().expect("valid expression");
/// assert_eq!(parser.normalize(&chain), "Unlicense");
/// ```
pub struct Parser {
    tokenizer: Tokenizer,
    normalize_fn: Option<Box<NormalizeFn>>,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("tokenizer", &self.tokenizer)
            .field("normalize_fn", &self.normalize_fn.is_some())
            .finish()
    }
}

impl Parser {
    /// Create a parser reading tokens from `tokenizer`.
    #[must_use]
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            normalize_fn: None,
        }
    }

    /// Register the function [`normalize`](Self::normalize) applies to every
    /// license name. A later registration replaces an earlier one.
    #[must_use]
    pub fn register_normalize_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.normalize_fn = Some(Box::new(f));
        self
    }

    /// Consume tokens until the end of input and build the expression tree.
    ///
    /// Operators chain strictly left to right within a nesting level. Tokens
    /// the tokenizer could not classify are skipped.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidExpression`] when a closing bracket does
    /// not match the innermost open group, when it closes a group that was
    /// never opened, or when the input ends with a group still open.
    pub fn parse(&mut self) -> Result<ExpressionChain, ParseError> {
        let mut builder = TreeBuilder::default();

        loop {
            let token = self.tokenizer.next_token();
            match token.kind {
                TokenKind::Identifier => builder.ident(&token.literal),
                TokenKind::And => builder.operator(Operator::And),
                TokenKind::Or => builder.operator(Operator::Or),
                TokenKind::OpenParen => self.open(&mut builder, Bracket::Paren),
                TokenKind::OpenBrace => self.open(&mut builder, Bracket::Brace),
                TokenKind::CloseParen => self.close(&mut builder, Bracket::Paren)?,
                TokenKind::CloseBrace => self.close(&mut builder, Bracket::Brace)?,
                TokenKind::EndOfInput => break,
                TokenKind::Illegal => {}
            }
        }

        let depth = builder.depth();
        builder.finish().inspect_err(|_| {
            log::debug!("{depth} group(s) left open at end of input");
        })
    }

    fn open(&self, builder: &mut TreeBuilder, bracket: Bracket) {
        log::debug!(
            "open {bracket:?} group at depth {} (offset {})",
            builder.depth(),
            self.tokenizer.position()
        );
        builder.open(bracket);
    }

    fn close(&self, builder: &mut TreeBuilder, bracket: Bracket) -> Result<(), ParseError> {
        builder.close(bracket).inspect_err(|_| {
            log::debug!(
                "unmatched {bracket:?} close at offset {}",
                self.tokenizer.position()
            );
        })?;
        log::debug!("closed {bracket:?} group, depth now {}", builder.depth());
        Ok(())
    }

    /// Render `chain` with the registered normalize function, if any.
    #[must_use]
    pub fn normalize(&self, chain: &ExpressionChain) -> String {
        render(chain, self.normalize_fn.as_deref())
    }
}
