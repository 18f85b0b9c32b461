//! End-to-end parsing and rendering through the public API.

#![expect(clippy::expect_used, reason = "tests assert successful parses")]

use rstest::rstest;

use license_expr::{
    ExpressionChain, Operator, ParseError, Parser, Term, TokenKind, Tokenizer, parse, render,
};

fn parse_ok(input: &str) -> ExpressionChain {
    parse(input).expect("expression should parse")
}

#[test]
fn parses_single_multi_word_license() {
    let chain = parse_ok("Public Domain");
    assert_eq!(chain.term(), &Term::Leaf("Public Domain".into()));
    assert_eq!(chain.operator(), None);
    assert_eq!(chain.to_string(), "Public Domain");
}

#[test]
fn parses_grouped_expression() {
    let chain =
        parse_ok("Public Domain AND ( GPLv2+ or AFL ) AND LGPLv2+ with distribution exceptions");
    let nodes: Vec<&ExpressionChain> = chain.iter().collect();
    assert_eq!(nodes.len(), 3);
    assert!(
        nodes
            .iter()
            .take(2)
            .all(|node| node.operator() == Some(Operator::And))
    );

    let group = nodes
        .get(1)
        .and_then(|node| node.term().as_group())
        .expect("middle node should be a group");
    assert_eq!(group.leaves(), vec!["GPLv2+", "AFL"]);
    assert_eq!(group.operator(), Some(Operator::Or));

    assert_eq!(
        render(&chain, None),
        "Public Domain AND ( GPLv2+ OR AFL ) AND LGPLv2+ with distribution exceptions"
    );
}

#[rstest]
#[case("Public Domain AND ( GPLv2+ ")]
#[case("Public Domain AND { GPLv2+ ")]
#[case("Public Domain AND { ( GPLv2+ } )")]
#[case("Public Domain AND  ({GPLv2+)}")]
#[case("MIT ) OR (BSD")]
fn rejects_malformed_expressions(#[case] input: &str) {
    assert_eq!(parse(input), Err(ParseError::InvalidExpression));
}

#[rstest]
#[case("MIT or BSD", "MIT OR BSD")]
#[case("MIT Or BSD", "MIT OR BSD")]
#[case("MIT OR BSD", "MIT OR BSD")]
#[case("MIT and BSD", "MIT AND BSD")]
#[case("MIT aNd BSD", "MIT AND BSD")]
fn renders_operators_in_uppercase(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse_ok(input).to_string(), expected);
}

#[rstest]
#[case("Public Domain")]
#[case("Public Domain AND ( GPLv2+ or AFL ) AND LGPLv2+ with distribution exceptions")]
#[case("Public Domain AND ( GPLv2+ or AFL AND ( CC0 or LGPL1.0) )")]
#[case("{MIT or BSD} and {Zlib}")]
#[case("  MIT\tor\n(BSD)  ")]
#[case("MIT and")]
#[case("()")]
#[case("")]
fn rendering_is_stable_under_reparsing(#[case] input: &str) {
    let once = parse_ok(input).to_string();
    let twice = parse_ok(&once).to_string();
    assert_eq!(once, twice);
}

#[test]
fn braces_render_as_parentheses() {
    assert_eq!(parse_ok("{MIT or BSD}").to_string(), "( MIT OR BSD )");
}

#[test]
fn normalize_rewrites_license_names() {
    let mut parser = Parser::new(Tokenizer::new("Public Domain")).register_normalize_fn(|name| {
        if name == "Public Domain" {
            "Unlicense".to_owned()
        } else {
            name.to_owned()
        }
    });
    let chain = parser.parse().expect("expression should parse");
    assert_eq!(parser.normalize(&chain), "Unlicense");
}

#[test]
fn normalize_reaches_nested_leaves_only() {
    let mut parser = Parser::new(Tokenizer::new("gpl or {mit and (bsd)}"))
        .register_normalize_fn(|name| name.to_ascii_uppercase());
    let chain = parser.parse().expect("expression should parse");
    assert_eq!(parser.normalize(&chain), "GPL OR ( MIT AND ( BSD ) )");
    // The tree itself is untouched.
    assert_eq!(chain.leaves(), vec!["gpl", "mit", "bsd"]);
}

#[test]
fn tokenizer_is_exhausted_after_parsing() {
    let mut parser = Parser::new(Tokenizer::new("MIT"));
    assert_eq!(parser.parse(), Ok(ExpressionChain::leaf("MIT")));
    assert_eq!(parser.parse(), Ok(ExpressionChain::default()));
}

#[test]
fn tokenizer_reports_operator_kinds() {
    let kinds: Vec<TokenKind> = Tokenizer::new("a OR b and {c}")
        .map(|token| token.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Or,
            TokenKind::Identifier,
            TokenKind::And,
            TokenKind::OpenBrace,
            TokenKind::Identifier,
            TokenKind::CloseBrace,
        ]
    );
}

#[test]
fn trees_are_shareable_across_threads() {
    let chain = parse_ok("MIT or (BSD and ISC)");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| chain.to_string())).collect();
        for handle in handles {
            assert_eq!(
                handle.join().expect("renderer thread should finish"),
                "MIT OR ( BSD AND ISC )"
            );
        }
    });
}
