use tokparse::{
    AttemptExt, BindExt, ManyExt, MapExt, Next, OrExt, Parser, PhraseExt, Promise, RaceExt,
    SepByExt, ThenExt, lift, literal, promise, satisfy,
};
use tokparse::{choose, seq};

fn number() -> impl Parser<&'static str, Output = i64> + Clone {
    satisfy(
        |token: &&str| token.chars().all(|ch| ch.is_ascii_digit()),
        "number",
    )
    .map(|token| token.parse::<i64>().unwrap())
}

/// sum = term ("+" term)* ; term = number | "(" sum ")"
fn sum() -> Promise<&'static str, i64> {
    promise(|this: Promise<&'static str, i64>| {
        let term = number().or(this.clone().bracketed(literal("("), literal(")")));
        term.sep_by1(literal("+"))
            .map(|terms| terms.iter().sum())
    })
}

#[test]
fn parses_flat_sum() {
    let tokens = ["1", "+", "2", "+", "3"];
    assert_eq!(sum().phrase().parse(&tokens), Ok(6));
}

#[test]
fn parses_nested_sum() {
    let tokens = ["1", "+", "(", "2", "+", "3", ")"];
    assert_eq!(sum().phrase().parse(&tokens), Ok(6));
}

#[test]
fn reports_failure_at_deepest_position() {
    // the separator commits, so the missing operand is reported where it
    // should have appeared
    let tokens = ["1", "+"];
    let error = sum().phrase().parse(&tokens).unwrap_err();
    assert_eq!(error.position(), Some(2));
    assert_eq!(error.format(), "expected (, number");
}

#[test]
fn reports_unbalanced_parenthesis() {
    let tokens = ["(", "1", "+", "2"];
    let error = sum().phrase().parse(&tokens).unwrap_err();
    assert_eq!(error.position(), Some(4));
    assert_eq!(error.format(), "expected )");
}

#[test]
fn balanced_parentheses_via_promise() {
    let balanced = promise(|this: Promise<char, ()>| {
        this.clone()
            .bracketed(literal('('), literal(')'))
            .many()
            .to(())
    });
    assert_eq!(balanced.clone().phrase().parse(&['(', '(', ')', ')']), Ok(()));
    let error = balanced.phrase().parse(&['(', '(']).unwrap_err();
    assert_eq!(error.format(), "expected )");
    assert_eq!(error.position(), Some(2));
}

#[test]
fn or_does_not_backtrack_after_consuming() {
    let parser = seq![lift("a"), lift("b")].or(seq![lift("a"), lift("c")]);
    let error = parser.parse(&["a", "d"]).unwrap_err();
    // the right alternative never ran: "a" was already consumed
    assert_eq!(error.format(), "expected b");
    assert_eq!(error.position(), Some(1));
}

#[test]
fn attempt_restores_the_alternative() {
    let parser = seq![lift("a"), lift("b")]
        .attempt_with("custom")
        .or(seq![lift("a"), lift("c")]);
    assert_eq!(parser.parse(&["a", "c"]), Ok(vec!["a", "c"]));
}

#[test]
fn race_resolves_ambiguity_by_longest_match() {
    let short = seq![lift("a")];
    let long = seq![lift("a"), lift("b")];
    let parser = short.race(long);
    // both interpretations succeed; the one that consumed both tokens wins
    assert_eq!(parser.parse(&["a", "b"]), Ok(vec!["a", "b"]));
    assert_eq!(parser.parse(&["a", "x"]), Ok(vec!["a"]));
}

#[test]
fn choose_is_first_match_wins() {
    let keyword = choose![lift("let"), lift("if"), lift("while")];
    assert_eq!(keyword.parse(&["while"]), Ok("while"));
    let error = keyword.parse(&["loop"]).unwrap_err();
    assert_eq!(error.format(), "expected if, let, while");
}

#[test]
fn next_reports_continuations_on_success() {
    let list = number().sep_by1(literal("+"));
    match list.next(&["1", "+", "2"]) {
        Next::Parsed {
            position,
            expected,
            value,
        } => {
            assert_eq!(value, vec![1, 2]);
            assert_eq!(position, 3);
            // a further "+" would have extended the match
            assert!(expected.contains("+"));
        }
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn next_reports_failures_without_raising() {
    let list = number().sep_by1(literal("+"));
    match list.next(&["1", "+", "x"]) {
        Next::Failed {
            position,
            expected,
            message,
        } => {
            assert_eq!(position, 2);
            assert!(expected.contains("number"));
            assert_eq!(message, "expected number");
        }
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn next_at_starts_mid_input() {
    let parser = literal("b");
    match parser.next_at(&["a", "b"], 1) {
        Next::Parsed { position, value, .. } => {
            assert_eq!(value, "b");
            assert_eq!(position, 2);
        }
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn bound_values_steer_later_parsers() {
    // a length-prefixed match: the first token says which token must follow
    let parser = satisfy(|token: &&str| !token.is_empty(), "tag")
        .bind(|tag| literal(tag))
        .phrase();
    assert_eq!(parser.parse(&["x", "x"]), Ok("x"));
    assert!(parser.parse(&["x", "y"]).is_err());
}
