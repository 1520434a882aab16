use crate::error::Expected;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that matches zero or more occurrences of the given
/// parser, collecting the values
///
/// Repetition is an explicit loop, not recursive composition, so it is safe
/// for inputs of any length. The loop stops successfully at the first
/// occurrence that fails without consuming, leaving the cursor at that point
/// and folding the failure's expectation set into the success's diagnostic
/// context; a committed occurrence failure propagates as committed.
///
/// Panics if the inner parser ever succeeds without consuming input: such a
/// grammar would loop forever, and that is a construction bug rather than an
/// input error.
#[derive(Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

const EMPTY_REPEAT: &str =
    "repetition applied to a parser that succeeds without consuming input";

impl<Tok, P> Parser<Tok> for Many<P>
where
    Tok: Token,
    P: Parser<Tok>,
{
    type Output = Vec<P::Output>;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Vec<P::Output>> {
        let mut values = Vec::new();
        let mut at = cursor;
        let mut consumed = false;
        let mut context = Expected::new();

        loop {
            match self.parser.run(at, input) {
                Reply::ConsumedOk {
                    value,
                    expected,
                    cursor,
                } => {
                    values.push(value);
                    at = cursor;
                    consumed = true;
                    context = expected;
                }
                Reply::EmptyOk { .. } => panic!("{}", EMPTY_REPEAT),
                Reply::EmptyErr { error } => {
                    return if consumed {
                        Reply::ConsumedOk {
                            value: values,
                            expected: context.union(error.into_expected()),
                            cursor: at,
                        }
                    } else {
                        Reply::EmptyOk {
                            value: values,
                            error,
                        }
                    };
                }
                Reply::ConsumedErr { error } => return Reply::ConsumedErr { error },
            }
        }
    }
}

/// Parser combinator that folds zero or more occurrences into an accumulator
///
/// The seed is cloned per run; `combine` feeds each parsed value into the
/// accumulator. Same termination and empty-success rules as [`Many`].
#[derive(Clone)]
pub struct ManyAccum<P, F, A> {
    parser: P,
    combine: F,
    seed: A,
}

impl<P, F, A> ManyAccum<P, F, A> {
    pub fn new(parser: P, combine: F, seed: A) -> Self {
        ManyAccum {
            parser,
            combine,
            seed,
        }
    }
}

impl<Tok, P, F, A> Parser<Tok> for ManyAccum<P, F, A>
where
    Tok: Token,
    P: Parser<Tok>,
    F: Fn(A, P::Output) -> A,
    A: Clone,
{
    type Output = A;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, A> {
        let mut accumulator = self.seed.clone();
        let mut at = cursor;
        let mut consumed = false;
        let mut context = Expected::new();

        loop {
            match self.parser.run(at, input) {
                Reply::ConsumedOk {
                    value,
                    expected,
                    cursor,
                } => {
                    accumulator = (self.combine)(accumulator, value);
                    at = cursor;
                    consumed = true;
                    context = expected;
                }
                Reply::EmptyOk { .. } => panic!("{}", EMPTY_REPEAT),
                Reply::EmptyErr { error } => {
                    return if consumed {
                        Reply::ConsumedOk {
                            value: accumulator,
                            expected: context.union(error.into_expected()),
                            cursor: at,
                        }
                    } else {
                        Reply::EmptyOk {
                            value: accumulator,
                            error,
                        }
                    };
                }
                Reply::ConsumedErr { error } => return Reply::ConsumedErr { error },
            }
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<Tok, P>(parser: P) -> Many<P>
where
    Tok: Token,
    P: Parser<Tok>,
{
    Many::new(parser)
}

/// Extension trait to add repetition method support for parsers
pub trait ManyExt<Tok: Token>: Parser<Tok> + Sized {
    /// Zero or more occurrences, collected into a `Vec`
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    /// Zero or more occurrences folded into `seed` with `combine`
    fn many_accum<F, A>(self, combine: F, seed: A) -> ManyAccum<Self, F, A>
    where
        F: Fn(A, Self::Output) -> A,
        A: Clone,
    {
        ManyAccum::new(self, combine, seed)
    }
}

impl<Tok: Token, P> ManyExt<Tok> for P where P: Parser<Tok> {}
