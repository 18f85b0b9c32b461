//! Tree assembly state driven by the parser's token loop.

use std::mem;

use crate::errors::ParseError;
use crate::expression::{ExpressionChain, Link, Operator, Term};

/// Bracket style that opened a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bracket {
    Paren,
    Brace,
}

/// Chain under construction at one nesting level.
///
/// Completed nodes are kept with the operator that follows them; `cursor` is
/// the node currently receiving identifiers and has no operator yet.
#[derive(Debug, Default)]
struct Level {
    done: Vec<(Term, Operator)>,
    cursor: Term,
}

impl Level {
    fn finish(self) -> ExpressionChain {
        self.done
            .into_iter()
            .rev()
            .fold(ExpressionChain::new(self.cursor), |next, (term, operator)| {
                ExpressionChain {
                    term,
                    link: Some(Link {
                        operator,
                        next: Box::new(next),
                    }),
                }
            })
    }
}

/// Saved state of the enclosing level while a group is parsed.
#[derive(Debug)]
struct Frame {
    enclosing: Level,
    bracket: Bracket,
}

/// Assembles an expression tree one token at a time.
#[derive(Debug, Default)]
pub(crate) struct TreeBuilder {
    level: Level,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    /// Number of groups currently open.
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Append an identifier to the cursor term.
    ///
    /// An empty leaf or a finished group is replaced by a fresh leaf; a
    /// non-empty leaf grows by one space-separated word.
    pub(crate) fn ident(&mut self, literal: &str) {
        match &mut self.level.cursor {
            Term::Leaf(text) if !text.is_empty() => {
                text.push(' ');
                text.push_str(literal);
            }
            cursor => *cursor = Term::Leaf(literal.to_owned()),
        }
    }

    /// Close the cursor node with `operator` and start a new empty node.
    pub(crate) fn operator(&mut self, operator: Operator) {
        let term = mem::take(&mut self.level.cursor);
        self.level.done.push((term, operator));
    }

    /// Save the current level and start an empty one for a group.
    pub(crate) fn open(&mut self, bracket: Bracket) {
        let enclosing = mem::take(&mut self.level);
        self.stack.push(Frame { enclosing, bracket });
    }

    /// Finish the innermost group and attach it to the enclosing cursor.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidExpression`] when no group is open or the
    /// open group used a different bracket style.
    pub(crate) fn close(&mut self, bracket: Bracket) -> Result<(), ParseError> {
        let Some(frame) = self.stack.pop() else {
            return Err(ParseError::InvalidExpression);
        };
        if frame.bracket != bracket {
            return Err(ParseError::InvalidExpression);
        }
        let group = mem::replace(&mut self.level, frame.enclosing).finish();
        self.level.cursor = Term::Group(Box::new(group));
        Ok(())
    }

    /// Return the outermost chain.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidExpression`] while any group is open.
    pub(crate) fn finish(self) -> Result<ExpressionChain, ParseError> {
        if !self.stack.is_empty() {
            return Err(ParseError::InvalidExpression);
        }
        Ok(self.level.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(builder: TreeBuilder) -> ExpressionChain {
        builder
            .finish()
            .unwrap_or_else(|err| panic!("builder should finish: {err}"))
    }

    #[test]
    fn joins_identifiers_with_single_spaces() {
        let mut builder = TreeBuilder::default();
        for word in ["LGPLv2+", "with", "distribution", "exceptions"] {
            builder.ident(word);
        }
        assert_eq!(
            finished(builder),
            ExpressionChain::leaf("LGPLv2+ with distribution exceptions")
        );
    }

    #[test]
    fn identifier_after_group_replaces_it() {
        let mut builder = TreeBuilder::default();
        builder.open(Bracket::Paren);
        builder.ident("MIT");
        assert_eq!(builder.close(Bracket::Paren), Ok(()));
        builder.ident("BSD");
        assert_eq!(finished(builder), ExpressionChain::leaf("BSD"));
    }

    #[test]
    fn folds_operators_in_order() {
        let mut builder = TreeBuilder::default();
        builder.ident("A");
        builder.operator(Operator::And);
        builder.ident("B");
        builder.operator(Operator::Or);
        builder.ident("C");
        let chain = finished(builder);
        let ops: Vec<Option<Operator>> = chain.iter().map(ExpressionChain::operator).collect();
        assert_eq!(ops, vec![Some(Operator::And), Some(Operator::Or), None]);
        assert_eq!(chain.leaves(), vec!["A", "B", "C"]);
    }

    #[test]
    fn trailing_operator_leaves_empty_tail() {
        let mut builder = TreeBuilder::default();
        builder.ident("A");
        builder.operator(Operator::And);
        let chain = finished(builder);
        assert_eq!(chain.node_count(), 2);
        assert!(chain.next().is_some_and(|tail| tail.term().is_empty_leaf()));
    }

    #[test]
    fn tracks_depth_across_groups() {
        let mut builder = TreeBuilder::default();
        builder.open(Bracket::Brace);
        builder.open(Bracket::Paren);
        assert_eq!(builder.depth(), 2);
        assert_eq!(builder.close(Bracket::Paren), Ok(()));
        assert_eq!(builder.depth(), 1);
        assert_eq!(builder.finish(), Err(ParseError::InvalidExpression));
    }

    #[test]
    fn rejects_mismatched_close() {
        let mut builder = TreeBuilder::default();
        builder.open(Bracket::Brace);
        assert_eq!(
            builder.close(Bracket::Paren),
            Err(ParseError::InvalidExpression)
        );
    }

    #[test]
    fn rejects_close_without_open() {
        let mut builder = TreeBuilder::default();
        assert_eq!(
            builder.close(Bracket::Brace),
            Err(ParseError::InvalidExpression)
        );
    }
}
