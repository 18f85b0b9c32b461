//! Error types surfaced by the expression parser.

use thiserror::Error;

/// Errors surfaced while building an expression tree.
///
/// The parser reports every structural violation with the same kind: a
/// closing bracket that does not match the most recently opened group, a
/// closing bracket with no open group, or input that ends while a group is
/// still open.
///
/// # Examples
/// ```
/// use license_expr::ParseError;
/// let err = ParseError::InvalidExpression;
/// assert_eq!(err.to_string(), "invalid expression error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The brackets in the expression are unbalanced or crossed.
    #[error("invalid expression error")]
    InvalidExpression,
}
