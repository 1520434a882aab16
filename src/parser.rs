use crate::error::{Expected, ParseError};
use crate::reply::Reply;
use crate::token::Token;

/// Core trait for parsers over a token slice
///
/// A parser is an immutable computation over a fixed input and a cursor; it
/// owns none of the input, is safe to re-run, and can be invoked at any
/// position. `run` is the whole execution protocol; the driver methods are
/// derived from it.
///
/// Composition happens through the extension traits (`MapExt`, `BindExt`,
/// `OrExt`, ...) which are blanket-implemented for every parser. Note that
/// `bind`/`or`/`race` chains nest calls to `run`, so recursion depth grows
/// with grammar depth; repetition (`many`, `many_accum`, `sep_by1`) is
/// iterative and safe for long inputs.
pub trait Parser<Tok: Token> {
    type Output;

    /// Run at `cursor` over `input`, producing exactly one [`Reply`]
    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Self::Output>;

    /// Run to completion from the start of `input`
    ///
    /// Returns the parsed value, or the finalized error on failure. Does not
    /// require the whole input to be consumed; use `phrase` for that.
    fn parse(&self, input: &[Tok]) -> Result<Self::Output, ParseError<Tok>> {
        self.parse_at(input, 0)
    }

    /// Run to completion from `start`
    fn parse_at(&self, input: &[Tok], start: usize) -> Result<Self::Output, ParseError<Tok>> {
        match self.run(start, input) {
            Reply::EmptyOk { value, .. } | Reply::ConsumedOk { value, .. } => Ok(value),
            Reply::EmptyErr { error } | Reply::ConsumedErr { error } => Err(error.anchor(start)),
        }
    }

    /// Run from the start of `input` and report a structured outcome
    fn next(&self, input: &[Tok]) -> Next<Tok, Self::Output> {
        self.next_at(input, 0)
    }

    /// Run from `start` and report a structured outcome without failing
    ///
    /// On success the outcome carries the furthest cursor reached and the
    /// tags that would have continued the match from there; on failure, the
    /// anchored position, the expectation set, and the formatted message.
    /// Intended for interactive callers (e.g. suggesting continuations).
    fn next_at(&self, input: &[Tok], start: usize) -> Next<Tok, Self::Output> {
        match self.run(start, input) {
            Reply::EmptyOk { value, error } => Next::Parsed {
                position: start,
                expected: error.into_expected(),
                value,
            },
            Reply::ConsumedOk {
                value,
                expected,
                cursor,
            } => Next::Parsed {
                position: cursor,
                expected,
                value,
            },
            Reply::EmptyErr { error } | Reply::ConsumedErr { error } => {
                let error = error.anchor(start);
                let position = error.position().unwrap_or(start);
                let message = error.format();
                Next::Failed {
                    position,
                    expected: error.into_expected(),
                    message,
                }
            }
        }
    }
}

/// Structured driver outcome, as returned by [`Parser::next`]
#[derive(Debug, Clone, PartialEq)]
pub enum Next<Tok: Token, T> {
    /// The parse succeeded; `position` is how far matching reached and
    /// `expected` the tags that could have extended it
    Parsed {
        position: usize,
        expected: Expected<Tok>,
        value: T,
    },
    /// The parse failed; `message` is the formatted diagnostic
    Failed {
        position: usize,
        expected: Expected<Tok>,
        message: String,
    },
}

/// Owned, type-erased parser
pub type BoxParser<'a, Tok, T> = Box<dyn Parser<Tok, Output = T> + 'a>;

impl<Tok: Token, P: Parser<Tok> + ?Sized> Parser<Tok> for &P {
    type Output = P::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Self::Output> {
        (**self).run(cursor, input)
    }
}

impl<Tok: Token, P: Parser<Tok> + ?Sized> Parser<Tok> for Box<P> {
    type Output = P::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Self::Output> {
        (**self).run(cursor, input)
    }
}
