//! Expression tree produced by the parser.
//!
//! A tree is a chain of terms joined left to right by operators. Each term is
//! either a license name or a nested group holding its own chain. Nodes own
//! their successors, so the structure is a strict tree with no sharing.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::errors::ParseError;
use crate::render::{render, render_term};

/// Binary operator joining two terms of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Conjunction; every joined license applies.
    And,
    /// Disjunction; any joined license may be chosen.
    Or,
}

impl Operator {
    /// Return the canonical uppercase spelling.
    ///
    /// # Examples
    /// ```
    /// use license_expr::Operator;
    /// assert_eq!(Operator::Or.as_str(), "OR");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One term of a chain: a license name or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// License name, possibly several space-joined words.
    Leaf(String),
    /// Bracketed sub-expression.
    Group(Box<ExpressionChain>),
}

impl Default for Term {
    fn default() -> Self {
        Self::Leaf(String::new())
    }
}

impl Term {
    /// Return the license name when the term is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Group(_) => None,
        }
    }

    /// Return the nested chain when the term is a group.
    #[must_use]
    pub fn as_group(&self) -> Option<&ExpressionChain> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(chain) => Some(chain),
        }
    }

    /// Return `true` for a leaf with no text.
    #[must_use]
    pub fn is_empty_leaf(&self) -> bool {
        matches!(self, Self::Leaf(text) if text.is_empty())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_term(self, None))
    }
}

/// Operator and successor of a chain node.
///
/// Keeping both in one value means a node has a successor exactly when it has
/// an operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// Operator joining the node to its successor.
    pub operator: Operator,
    /// The successor node.
    pub next: Box<ExpressionChain>,
}

/// A chain of terms joined by operators at one nesting level.
///
/// # Examples
/// ```
/// use license_expr::{ExpressionChain, Operator};
/// let chain = ExpressionChain::leaf("MIT")
///     .with_next(Operator::Or, ExpressionChain::leaf("Apache-2.0"));
/// assert_eq!(chain.to_string(), "MIT OR Apache-2.0");
/// assert_eq!(chain.node_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExpressionChain {
    /// Term held by this node.
    pub term: Term,
    /// Operator and successor, absent on the final node.
    pub link: Option<Link>,
}

impl ExpressionChain {
    /// Create a single-node chain holding `term`.
    #[must_use]
    pub const fn new(term: Term) -> Self {
        Self { term, link: None }
    }

    /// Create a single-node chain holding a license name.
    #[must_use]
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::new(Term::Leaf(text.into()))
    }

    /// Create a single-node chain wrapping `inner` as a group.
    #[must_use]
    pub fn group(inner: Self) -> Self {
        Self::new(Term::Group(Box::new(inner)))
    }

    /// Attach `next` after the final node of this chain, joined by `operator`.
    #[must_use]
    pub fn with_next(mut self, operator: Operator, next: Self) -> Self {
        self.append(Link {
            operator,
            next: Box::new(next),
        });
        self
    }

    fn append(&mut self, link: Link) {
        if let Some(existing) = self.link.as_mut() {
            existing.next.append(link);
            return;
        }
        self.link = Some(link);
    }

    /// Term held by this node.
    #[must_use]
    pub const fn term(&self) -> &Term {
        &self.term
    }

    /// Operator joining this node to its successor.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.link.as_ref().map(|link| link.operator)
    }

    /// Successor of this node.
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        self.link.as_ref().map(|link| &*link.next)
    }

    /// Iterate over the nodes of this level in order.
    #[must_use]
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { next: Some(self) }
    }

    /// Number of nodes at this level, not counting nested groups.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Collect the non-empty leaf names of the whole tree, depth first.
    ///
    /// # Examples
    /// ```
    /// use license_expr::parse;
    /// let chain = parse("MIT AND (GPLv2+ or AFL)").expect("valid expression");
    /// assert_eq!(chain.leaves(), vec!["MIT", "GPLv2+", "AFL"]);
    /// ```
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        for node in self {
            match node.term() {
                Term::Leaf(text) if !text.is_empty() => leaves.push(text),
                Term::Leaf(_) => {}
                Term::Group(inner) => inner.collect_leaves(leaves),
            }
        }
    }
}

impl<'a> IntoIterator for &'a ExpressionChain {
    type Item = &'a ExpressionChain;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the nodes of one chain level.
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    next: Option<&'a ExpressionChain>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a ExpressionChain;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}

impl FusedIterator for Nodes<'_> {}

impl fmt::Display for ExpressionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, None))
    }
}

impl FromStr for ExpressionChain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
