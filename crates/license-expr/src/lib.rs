//! Parse license boolean expressions into trees and render them back.
//!
//! Expressions combine free-text license names with `AND`/`OR` operators and
//! nest sub-expressions inside parentheses or braces. Parsing is a single
//! pass over a byte-level [`Tokenizer`]; rendering produces a canonical string
//! with uppercase operators and parenthesised groups, optionally rewriting
//! license names along the way.
//!
//! ```
//! let chain = license_expr::parse("Public Domain AND ( GPLv2+ or AFL )")
//!     .expect("valid expression");
//! assert_eq!(chain.to_string(), "Public Domain AND ( GPLv2+ OR AFL )");
//! ```

mod errors;
mod expression;
mod lexer;
mod parser;
mod render;
mod token;

/// JSON export of parsed expression trees.
#[cfg(feature = "json")]
pub mod json;

pub use errors::ParseError;
pub use expression::{ExpressionChain, Link, Nodes, Operator, Term};
pub use lexer::Tokenizer;
pub use parser::Parser;
pub use render::{NormalizeFn, render};
pub use token::{END_OF_INPUT_LITERAL, Token, TokenKind, lookup_ident};

/// Parse `input` into an expression tree.
///
/// # Errors
/// Returns [`ParseError::InvalidExpression`] when the brackets in `input` are
/// unbalanced or crossed.
///
/// # Examples
/// ```
/// use license_expr::{ParseError, parse};
/// assert!(parse("MIT or (BSD").is_err());
/// assert_eq!(parse("{MIT)"), Err(ParseError::InvalidExpression));
/// ```
pub fn parse(input: &str) -> Result<ExpressionChain, ParseError> {
    Parser::new(Tokenizer::new(input)).parse()
}
