use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that sequences a parser with a continuation built from
/// its value
///
/// If the first parser succeeds without consuming, the continuation runs in
/// its place at the same cursor and its reply stands as the whole reply. If
/// the first parser consumed, the chain is committed: any failure of the
/// continuation, consuming or not, propagates as a committed failure.
#[derive(Clone)]
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<Tok, P, F, Q> Parser<Tok> for Bind<P, F>
where
    Tok: Token,
    P: Parser<Tok>,
    Q: Parser<Tok>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Q::Output> {
        match self.parser.run(cursor, input) {
            Reply::EmptyOk { value, .. } => (self.binder)(value).run(cursor, input),
            Reply::EmptyErr { error } => Reply::EmptyErr { error },
            Reply::ConsumedOk {
                value,
                expected,
                cursor: mid,
            } => match (self.binder)(value).run(mid, input) {
                // Continuation stayed put: the outer expected-set still
                // describes the reachable position, so union it in.
                Reply::EmptyOk { value, error } => Reply::ConsumedOk {
                    value,
                    expected: expected.union(error.into_expected()),
                    cursor: mid,
                },
                Reply::ConsumedOk {
                    value,
                    expected,
                    cursor,
                } => Reply::ConsumedOk {
                    value,
                    expected,
                    cursor,
                },
                Reply::EmptyErr { error } | Reply::ConsumedErr { error } => {
                    Reply::ConsumedErr { error }
                }
            },
            Reply::ConsumedErr { error } => Reply::ConsumedErr { error },
        }
    }
}

/// Convenience function to create a Bind parser
pub fn bind<Tok, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    Tok: Token,
    P: Parser<Tok>,
    Q: Parser<Tok>,
    F: Fn(P::Output) -> Q,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<Tok: Token>: Parser<Tok> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        Q: Parser<Tok>,
        F: Fn(Self::Output) -> Q,
    {
        Bind::new(self, binder)
    }
}

impl<Tok: Token, P> BindExt<Tok> for P where P: Parser<Tok> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::pure::pure;
    use crate::satisfy::satisfy;

    #[test]
    fn test_bind_threads_value() {
        // parse a digit, then require exactly that many 'x' tokens... keep it
        // small: digit then the same token again
        let parser = satisfy(|ch: &char| ch.is_ascii_digit(), "digit")
            .bind(|digit| literal(digit));
        assert_eq!(parser.parse(&['3', '3']), Ok('3'));
        assert!(parser.parse(&['3', '4']).is_err());
    }

    #[test]
    fn test_bind_after_consuming_commits() {
        let parser = literal('a').bind(|_| literal('b'));
        match parser.run(0, &['a', 'c']) {
            Reply::ConsumedErr { error } => {
                assert_eq!(error.format(), "expected b");
                assert_eq!(error.position(), Some(1));
            }
            reply => panic!("unexpected reply: {:?}", reply),
        }
    }

    #[test]
    fn test_bind_from_empty_success_stays_retryable() {
        let parser = pure('a').bind(|_| literal('b'));
        match parser.run(0, &['c']) {
            Reply::EmptyErr { error } => assert_eq!(error.format(), "expected b"),
            reply => panic!("unexpected reply: {:?}", reply),
        }
    }

    #[test]
    fn test_bind_empty_then_empty_stays_empty() {
        // both sides are polymorphic in the token type, so build the chain
        // directly and let the input pin it down
        let parser = Bind::new(pure(1), |n| pure(n + 1));
        match parser.run(0, &['x']) {
            Reply::EmptyOk { value, .. } => assert_eq!(value, 2),
            reply => panic!("unexpected reply: {:?}", reply),
        }
    }
}
