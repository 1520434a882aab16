use crate::error::{Expected, Tag};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that gives a whole sub-grammar a single human-facing
/// expectation label
///
/// On failure, the accumulated expectation set is replaced with the one
/// label/tag pair, so callers see "expected number" rather than the union of
/// every token that could start a number. Failures that already carry
/// free-text reasons (from `fail` or `attempt`) are left untouched.
#[derive(Clone)]
pub struct Desc<Tok: Token, P> {
    parser: P,
    label: String,
    tag: Tag<Tok>,
}

impl<Tok: Token, P> Desc<Tok, P> {
    pub fn new(parser: P, label: String, tag: Tag<Tok>) -> Self {
        Desc { parser, label, tag }
    }

    fn relabel(&self, error: crate::error::ParseError<Tok>) -> crate::error::ParseError<Tok> {
        if error.reasons().is_empty() {
            let expected = Expected::singleton(self.label.clone(), self.tag.clone());
            error.with_expected(expected)
        } else {
            error
        }
    }
}

impl<Tok, P> Parser<Tok> for Desc<Tok, P>
where
    Tok: Token,
    P: Parser<Tok>,
{
    type Output = P::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, P::Output> {
        match self.parser.run(cursor, input) {
            Reply::EmptyErr { error } => Reply::EmptyErr {
                error: self.relabel(error),
            },
            Reply::ConsumedErr { error } => Reply::ConsumedErr {
                error: self.relabel(error),
            },
            reply => reply,
        }
    }
}

/// Extension trait to add .desc() method support for parsers
pub trait DescExt<Tok: Token>: Parser<Tok> + Sized {
    fn desc(self, label: impl Into<String>, tag: Tag<Tok>) -> Desc<Tok, Self> {
        Desc::new(self, label.into(), tag)
    }

    /// Label with a `Named` tag derived from the label itself
    fn named(self, label: impl Into<String>) -> Desc<Tok, Self> {
        let label = label.into();
        let tag = Tag::Named(label.clone());
        Desc::new(self, label, tag)
    }
}

impl<Tok: Token, P> DescExt<Tok> for P where P: Parser<Tok> {}
