use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that transforms the output of a parser using a mapping
/// function
///
/// Both success paths are transformed; failures and all diagnostic context
/// pass through unchanged.
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<Tok, P, F, U> Parser<Tok> for Map<P, F>
where
    Tok: Token,
    P: Parser<Tok>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, U> {
        self.parser.run(cursor, input).map_value(&self.mapper)
    }
}

/// Parser combinator that replaces the output of a parser with a fixed value
#[derive(Clone)]
pub struct To<P, T> {
    parser: P,
    value: T,
}

impl<P, T> To<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        To { parser, value }
    }
}

impl<Tok, P, T> Parser<Tok> for To<P, T>
where
    Tok: Token,
    P: Parser<Tok>,
    T: Clone,
{
    type Output = T;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, T> {
        self.parser
            .run(cursor, input)
            .map_value(|_| self.value.clone())
    }
}

/// Convenience function to create a Map parser
pub fn map<Tok, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    Tok: Token,
    P: Parser<Tok>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and .to() method support for parsers
pub trait MapExt<Tok: Token>: Parser<Tok> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    /// Discard the parsed value and produce `value` instead
    fn to<T: Clone>(self, value: T) -> To<Self, T> {
        To::new(self, value)
    }
}

impl<Tok: Token, P> MapExt<Tok> for P where P: Parser<Tok> {}
