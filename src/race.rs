use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that explores both branches and keeps the one that made
/// more progress
///
/// Unlike [`Or`](crate::or::Or), both branches run unconditionally from the
/// same cursor; this resolves ambiguity by longest match instead of by
/// first-match-wins order. Decision rules:
///
/// - both succeed consuming: the further cursor wins; on a tie the left value
///   is kept and the expectation sets union.
/// - a consuming success beats every other outcome.
/// - a committed failure beats any non-consuming outcome; two committed
///   failures merge under the farthest-progress rule.
/// - among non-consuming outcomes, success beats failure and errors merge.
#[derive(Clone)]
pub struct Race<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Race<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Race { first, second }
    }
}

impl<Tok, P1, P2, O> Parser<Tok> for Race<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok, Output = O>,
    P2: Parser<Tok, Output = O>,
{
    type Output = O;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, O> {
        let first = self.first.run(cursor, input);
        let second = self.second.run(cursor, input);
        match (first, second) {
            (
                Reply::ConsumedOk {
                    value,
                    expected,
                    cursor: left,
                },
                Reply::ConsumedOk {
                    value: second_value,
                    expected: second_expected,
                    cursor: right,
                },
            ) => {
                if right > left {
                    Reply::ConsumedOk {
                        value: second_value,
                        expected: second_expected,
                        cursor: right,
                    }
                } else if left > right {
                    Reply::ConsumedOk {
                        value,
                        expected,
                        cursor: left,
                    }
                } else {
                    Reply::ConsumedOk {
                        value,
                        expected: expected.union(second_expected),
                        cursor: left,
                    }
                }
            }
            (winner @ Reply::ConsumedOk { .. }, _) => winner,
            (_, winner @ Reply::ConsumedOk { .. }) => winner,
            (Reply::ConsumedErr { error }, Reply::ConsumedErr { error: second_error }) => {
                Reply::ConsumedErr {
                    error: error.merge(second_error),
                }
            }
            (committed @ Reply::ConsumedErr { .. }, _) => committed,
            (_, committed @ Reply::ConsumedErr { .. }) => committed,
            (
                Reply::EmptyOk { value, error },
                Reply::EmptyOk {
                    error: second_error,
                    ..
                },
            )
            | (
                Reply::EmptyOk { value, error },
                Reply::EmptyErr { error: second_error },
            ) => Reply::EmptyOk {
                value,
                error: error.merge(second_error),
            },
            (Reply::EmptyErr { error }, Reply::EmptyOk { value, error: second_error }) => {
                Reply::EmptyOk {
                    value,
                    error: error.merge(second_error),
                }
            }
            (Reply::EmptyErr { error }, Reply::EmptyErr { error: second_error }) => {
                Reply::EmptyErr {
                    error: error.merge(second_error),
                }
            }
        }
    }
}

/// Convenience function to create a Race parser
pub fn race<Tok, P1, P2, O>(first: P1, second: P2) -> Race<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok, Output = O>,
    P2: Parser<Tok, Output = O>,
{
    Race::new(first, second)
}

/// Extension trait to add .race() method support for parsers
pub trait RaceExt<Tok: Token>: Parser<Tok> + Sized {
    fn race<P>(self, other: P) -> Race<Self, P>
    where
        P: Parser<Tok, Output = Self::Output>,
    {
        Race::new(self, other)
    }
}

impl<Tok: Token, P> RaceExt<Tok> for P where P: Parser<Tok> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindExt;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::pure::pure;

    #[test]
    fn test_race_prefers_longest_match() {
        let short = literal("a").map(|_| 1);
        let long = literal("a").bind(|_| literal("b")).map(|_| 2);
        let parser = short.race(long);
        // both succeed, the two-token branch consumed further
        assert_eq!(parser.parse(&["a", "b"]), Ok(2));
    }

    #[test]
    fn test_race_falls_back_to_shorter_branch() {
        let short = literal("a").map(|_| 1);
        let long = literal("a").bind(|_| literal("b")).map(|_| 2);
        let parser = short.race(long);
        // the long branch dies committed, the short one still wins
        assert_eq!(parser.parse(&["a", "c"]), Ok(1));
    }

    #[test]
    fn test_race_tie_keeps_left_value() {
        let parser = literal('a').map(|_| "left").race(literal('a').map(|_| "right"));
        assert_eq!(parser.parse(&['a']), Ok("left"));
    }

    #[test]
    fn test_race_prefers_empty_success_over_empty_failure() {
        let parser = literal('z').map(|_| 0).race(pure(9));
        assert_eq!(parser.parse(&['a']), Ok(9));
    }

    #[test]
    fn test_race_merges_empty_failures() {
        let parser = literal('a').race(literal('b'));
        let error = parser.parse(&['c']).unwrap_err();
        assert_eq!(error.format(), "expected a, b");
    }

    #[test]
    fn test_race_merges_committed_failures_by_position() {
        let left = literal("a").bind(|_| literal("b"));
        let right = literal("a")
            .bind(|_| literal("c"))
            .bind(|_| literal("d"));
        let parser = left.race(right);
        let error = parser.parse(&["a", "c", "x"]).unwrap_err();
        // right branch got further before failing
        assert_eq!(error.format(), "expected d");
        assert_eq!(error.position(), Some(2));
    }
}
