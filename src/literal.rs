use crate::error::{Expected, ParseError, Tag};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser that matches one exact token by equality
#[derive(Clone)]
pub struct Literal<Tok: Token> {
    token: Tok,
}

impl<Tok: Token> Literal<Tok> {
    pub fn new(token: Tok) -> Self {
        Literal { token }
    }
}

impl<Tok: Token> Parser<Tok> for Literal<Tok> {
    type Output = Tok;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Tok> {
        match input.get(cursor) {
            Some(token) if *token == self.token => Reply::ConsumedOk {
                value: token.clone(),
                expected: Expected::new(),
                cursor: cursor + 1,
            },
            _ => Reply::EmptyErr {
                error: ParseError::expect(
                    self.token.to_string(),
                    Tag::Literal(self.token.clone()),
                    cursor,
                ),
            },
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal<Tok: Token>(token: Tok) -> Literal<Tok> {
    Literal::new(token)
}

/// Coerce a token-convertible value into a parser for that exact token
///
/// This is the lifting step used with the `seq!`/`choose!` builders: a value
/// that converts into the token type becomes a `literal` for it. Parsers are
/// used as-is in the builders, so they never pass through `lift`.
pub fn lift<Tok: Token>(value: impl Into<Tok>) -> Literal<Tok> {
    literal(value.into())
}
