use crate::literal::{Literal, literal};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that sequences two parsers and keeps the second value
#[derive(Clone)]
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<Tok, P1, P2> Parser<Tok> for Then<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok>,
    P2: Parser<Tok>,
{
    type Output = P2::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, P2::Output> {
        match self.first.run(cursor, input) {
            Reply::EmptyOk { .. } => self.second.run(cursor, input),
            Reply::EmptyErr { error } => Reply::EmptyErr { error },
            Reply::ConsumedOk {
                expected,
                cursor: mid,
                ..
            } => match self.second.run(mid, input) {
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

/// Parser combinator that sequences two parsers and keeps the first value
#[derive(Clone)]
pub struct Skip<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Skip { first, second }
    }
}

impl<Tok, P1, P2> Parser<Tok> for Skip<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok>,
    P2: Parser<Tok>,
{
    type Output = P1::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, P1::Output> {
        match self.first.run(cursor, input) {
            Reply::EmptyOk { value, .. } => {
                self.second.run(cursor, input).map_value(|_| value)
            }
            Reply::EmptyErr { error } => Reply::EmptyErr { error },
            Reply::ConsumedOk {
                value,
                expected,
                cursor: mid,
            } => match self.second.run(mid, input) {
                Reply::EmptyOk { error, .. } => Reply::ConsumedOk {
                    value,
                    expected: expected.union(error.into_expected()),
                    cursor: mid,
                },
                Reply::ConsumedOk {
                    expected, cursor, ..
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

/// Extension trait for sequencing where one side's value is discarded
pub trait ThenExt<Tok: Token>: Parser<Tok> + Sized {
    /// Run `self`, discard its value, then run `next` and keep its value
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        P: Parser<Tok>,
    {
        Then::new(self, next)
    }

    /// Run `self` and keep its value, then run `next` and discard its value
    fn skip<P>(self, next: P) -> Skip<Self, P>
    where
        P: Parser<Tok>,
    {
        Skip::new(self, next)
    }

    /// Surround `self` with an opening and closing parser, keeping only the
    /// middle value
    fn bracketed<O, C>(self, open: O, close: C) -> Then<O, Skip<Self, C>>
    where
        O: Parser<Tok>,
        C: Parser<Tok>,
    {
        Then::new(open, Skip::new(self, close))
    }

    /// Surround `self` with literal `(` and `)` tokens
    fn paren(self) -> Then<Literal<Tok>, Skip<Self, Literal<Tok>>>
    where
        Tok: From<char>,
    {
        self.bracketed(literal(Tok::from('(')), literal(Tok::from(')')))
    }
}

impl<Tok: Token, P> ThenExt<Tok> for P where P: Parser<Tok> {}
