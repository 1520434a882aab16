use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that applies a function to the elements of a parsed
/// sequence
///
/// The sequence-result analog of `map`: where a `seq!` fold produces a
/// `Vec`, `apply` consumes it as the function's arguments.
#[derive(Clone)]
pub struct Apply<P, F> {
    parser: P,
    function: F,
}

impl<P, F> Apply<P, F> {
    pub fn new(parser: P, function: F) -> Self {
        Apply { parser, function }
    }
}

impl<Tok, P, F, T, U> Parser<Tok> for Apply<P, F>
where
    Tok: Token,
    P: Parser<Tok, Output = Vec<T>>,
    F: Fn(Vec<T>) -> U,
{
    type Output = U;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, U> {
        self.parser.run(cursor, input).map_value(&self.function)
    }
}

/// Parser combinator that right-folds a non-empty parsed sequence with a
/// binary function
///
/// Panics if the parsed sequence is empty; guarantee non-emptiness at the
/// grammar level (e.g. with `sep_by1` or a non-empty `seq!`).
#[derive(Clone)]
pub struct Foldr1<P, F> {
    parser: P,
    fold: F,
}

impl<P, F> Foldr1<P, F> {
    pub fn new(parser: P, fold: F) -> Self {
        Foldr1 { parser, fold }
    }
}

impl<Tok, P, F, T> Parser<Tok> for Foldr1<P, F>
where
    Tok: Token,
    P: Parser<Tok, Output = Vec<T>>,
    F: Fn(T, T) -> T,
{
    type Output = T;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, T> {
        self.parser.run(cursor, input).map_value(|values| {
            let Some(folded) = values
                .into_iter()
                .rev()
                .reduce(|accumulator, value| (self.fold)(value, accumulator))
            else {
                panic!("foldr1 applied to an empty sequence");
            };
            folded
        })
    }
}

/// Extension trait for parsers whose output is a sequence of values
pub trait ApplyExt<Tok: Token, T>: Parser<Tok, Output = Vec<T>> + Sized {
    /// Apply `function` to the parsed elements
    fn apply<F, U>(self, function: F) -> Apply<Self, F>
    where
        F: Fn(Vec<T>) -> U,
    {
        Apply::new(self, function)
    }

    /// Right-fold the parsed elements with `fold`; the sequence must be
    /// non-empty
    fn foldr1<F>(self, fold: F) -> Foldr1<Self, F>
    where
        F: Fn(T, T) -> T,
    {
        Foldr1::new(self, fold)
    }
}

impl<Tok: Token, T, P> ApplyExt<Tok, T> for P where P: Parser<Tok, Output = Vec<T>> {}
