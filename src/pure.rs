use crate::error::ParseError;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser that always succeeds with a fixed value, consuming nothing
#[derive(Clone)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<Tok: Token, T: Clone> Parser<Tok> for Pure<T> {
    type Output = T;

    fn run(&self, _cursor: usize, _input: &[Tok]) -> Reply<Tok, T> {
        Reply::EmptyOk {
            value: self.value.clone(),
            error: ParseError::empty(),
        }
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}
