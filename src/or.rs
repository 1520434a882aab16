use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that tries the first parser, and if it fails without
/// consuming input, tries the second parser
///
/// A first-branch failure that consumed input is committed: the second branch
/// is never attempted and the failure propagates (wrap the first branch in
/// `attempt` to restore backtracking). When both branches fail empty, their
/// errors merge under the farthest-progress rule so the report names every
/// alternative that was viable at the failure point.
#[derive(Clone)]
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<Tok, P1, P2, O> Parser<Tok> for Or<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok, Output = O>,
    P2: Parser<Tok, Output = O>,
{
    type Output = O;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, O> {
        match self.first.run(cursor, input) {
            Reply::EmptyErr { error } => match self.second.run(cursor, input) {
                Reply::EmptyOk {
                    value,
                    error: second_error,
                } => Reply::EmptyOk {
                    value,
                    error: error.merge(second_error),
                },
                Reply::EmptyErr { error: second_error } => Reply::EmptyErr {
                    error: error.merge(second_error),
                },
                Reply::ConsumedErr { error: second_error } => Reply::ConsumedErr {
                    error: error.merge(second_error),
                },
                consumed_ok => consumed_ok,
            },
            reply => reply,
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<Tok, P1, P2, O>(first: P1, second: P2) -> Or<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok, Output = O>,
    P2: Parser<Tok, Output = O>,
{
    Or::new(first, second)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<Tok: Token>: Parser<Tok> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Tok, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<Tok: Token, P> OrExt<Tok> for P where P: Parser<Tok> {}

/// Left-fold a list of alternatives with [`Or`]: first match wins
///
/// ```
/// use tokparse::{Parser, choose, literal};
///
/// let keyword = choose![literal("let"), literal("if"), literal("while")];
/// assert_eq!(keyword.parse(&["if"]), Ok("if"));
/// ```
#[macro_export]
macro_rules! choose {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let parser = $first;
        $(let parser = $crate::or::Or::new(parser, $rest);)*
        parser
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindExt;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::pure::pure;

    #[test]
    fn test_or_first_succeeds() {
        let parser = literal('a').or(literal('b'));
        assert_eq!(parser.parse(&['a']), Ok('a'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = literal('a').or(literal('b'));
        assert_eq!(parser.parse(&['b']), Ok('b'));
    }

    #[test]
    fn test_or_merges_empty_failures() {
        let parser = literal('a').or(literal('b'));
        let error = parser.parse(&['c']).unwrap_err();
        assert_eq!(error.format(), "expected a, b");
        assert_eq!(error.position(), Some(0));
    }

    #[test]
    fn test_or_short_circuits_on_empty_success() {
        let parser = pure('x').or(literal('y'));
        assert_eq!(parser.parse(&['z']), Ok('x'));
    }

    #[test]
    fn test_or_does_not_backtrack_past_consumed_input() {
        // canonical regression test: "a" was consumed by the left branch, so
        // the right branch never runs and only "b" is reported
        let left = literal("a").bind(|_| literal("b"));
        let right = literal("a").bind(|_| literal("c"));
        let parser = left.or(right);
        let error = parser.parse(&["a", "d"]).unwrap_err();
        assert_eq!(error.format(), "expected b");
        assert_eq!(error.position(), Some(1));
    }

    #[test]
    fn test_or_farthest_failure_wins() {
        // right branch fails deeper into the input than the left one
        let left = literal("x");
        let right = literal("a").bind(|_| literal("b")).map(|_| "ab");
        let parser = left.map(|_| "x").or(right);
        let error = parser.parse(&["a", "c"]).unwrap_err();
        assert_eq!(error.format(), "expected b");
        assert_eq!(error.position(), Some(1));
    }

    #[test]
    fn test_choose_macro_folds_left() {
        let parser = choose![literal('a'), literal('b'), literal('c')];
        assert_eq!(parser.parse(&['c']), Ok('c'));
        let error = parser.parse(&['d']).unwrap_err();
        assert_eq!(error.format(), "expected a, b, c");
    }
}
