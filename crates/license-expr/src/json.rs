//! JSON writer for parsed expression trees.
//!
//! Each chain level serializes as a list of nodes in source order. A node
//! carries its term (`{"leaf": ...}` or `{"group": ...}`) and the operator
//! that follows it, which is `null` on the final node of a level.

use std::io::Write;

use serde::Serialize;

use crate::expression::{ExpressionChain, Term};

#[derive(Serialize)]
struct JsonChain<'a> {
    nodes: Vec<JsonNode<'a>>,
}

#[derive(Serialize)]
struct JsonNode<'a> {
    term: JsonTerm<'a>,
    operator: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum JsonTerm<'a> {
    Leaf(&'a str),
    Group(JsonChain<'a>),
}

impl<'a> From<&'a ExpressionChain> for JsonChain<'a> {
    fn from(chain: &'a ExpressionChain) -> Self {
        let nodes = chain
            .iter()
            .map(|node| JsonNode {
                term: JsonTerm::from(node.term()),
                operator: node.operator().map(|operator| operator.as_str()),
            })
            .collect();
        Self { nodes }
    }
}

impl<'a> From<&'a Term> for JsonTerm<'a> {
    fn from(term: &'a Term) -> Self {
        match term {
            Term::Leaf(text) => Self::Leaf(text),
            Term::Group(inner) => Self::Group(JsonChain::from(&**inner)),
        }
    }
}

/// Serialize `chain` into the supplied writer.
///
/// # Examples
/// ```rust
/// use license_expr::{json, parse};
///
/// let chain = parse("MIT or BSD").unwrap();
/// let mut buffer = Vec::new();
/// json::write(&mut buffer, &chain).unwrap();
/// let output = String::from_utf8(buffer).unwrap();
/// assert!(output.contains("\"operator\":\"OR\""));
/// ```
///
/// # Errors
/// Returns an error when writing to `writer` fails.
pub fn write<W: Write>(writer: &mut W, chain: &ExpressionChain) -> serde_json::Result<()> {
    serde_json::to_writer(writer, &JsonChain::from(chain))
}

/// Produce a JSON string representation of `chain`.
///
/// # Examples
/// ```rust
/// use license_expr::{json, parse};
///
/// let chain = parse("MIT").unwrap();
/// let json = json::to_string(&chain).unwrap();
/// assert_eq!(json, r#"{"nodes":[{"term":{"leaf":"MIT"},"operator":null}]}"#);
/// ```
///
/// # Errors
/// Returns an error when serialization fails.
pub fn to_string(chain: &ExpressionChain) -> serde_json::Result<String> {
    serde_json::to_string(&JsonChain::from(chain))
}
