//! Render expression trees back into canonical strings.

use std::borrow::Cow;

use crate::expression::{ExpressionChain, Term};

/// Caller-supplied rewrite applied to every license name during rendering.
pub type NormalizeFn = dyn Fn(&str) -> String;

/// Render `chain` as a canonical expression string.
///
/// Operators are always uppercase and every group is wrapped in parentheses,
/// whichever bracket opened it. Words are separated by exactly one space and
/// the result has no leading or trailing whitespace. When `normalize` is
/// given it rewrites each license name; groups are never passed to it.
///
/// # Examples
/// ```
/// use license_expr::{parse, render};
/// let chain = parse("MIT or {BSD and ISC}").expect("valid expression");
/// assert_eq!(render(&chain, None), "MIT OR ( BSD AND ISC )");
///
/// let lower = |name: &str| name.to_ascii_lowercase();
/// assert_eq!(render(&chain, Some(&lower)), "mit OR ( bsd AND isc )");
/// ```
#[must_use]
pub fn render(chain: &ExpressionChain, normalize: Option<&NormalizeFn>) -> String {
    let mut words = Vec::new();
    push_chain(&mut words, chain, normalize);
    words.join(" ")
}

pub(crate) fn render_term(term: &Term, normalize: Option<&NormalizeFn>) -> String {
    let mut words = Vec::new();
    push_term(&mut words, term, normalize);
    words.join(" ")
}

fn push_chain<'a>(
    words: &mut Vec<Cow<'a, str>>,
    chain: &'a ExpressionChain,
    normalize: Option<&NormalizeFn>,
) {
    for node in chain {
        push_term(words, node.term(), normalize);
        if let Some(operator) = node.operator() {
            words.push(Cow::Borrowed(operator.as_str()));
        }
    }
}

fn push_term<'a>(
    words: &mut Vec<Cow<'a, str>>,
    term: &'a Term,
    normalize: Option<&NormalizeFn>,
) {
    match term {
        Term::Leaf(text) => {
            let name = normalize.map_or_else(
                || Cow::Borrowed(text.as_str()),
                |f| Cow::Owned(f(text.as_str())),
            );
            if !name.is_empty() {
                words.push(name);
            }
        }
        Term::Group(inner) => {
            words.push(Cow::Borrowed("("));
            push_chain(words, inner, normalize);
            words.push(Cow::Borrowed(")"));
        }
    }
}
