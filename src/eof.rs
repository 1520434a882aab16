use crate::error::{ParseError, Tag};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser that succeeds only at the end of the input, consuming nothing
#[derive(Clone, Copy)]
pub struct Eof;

impl<Tok: Token> Parser<Tok> for Eof {
    type Output = ();

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, ()> {
        if cursor == input.len() {
            Reply::EmptyOk {
                value: (),
                error: ParseError::empty(),
            }
        } else {
            Reply::EmptyErr {
                error: ParseError::expect("EOF", Tag::EndOfInput, cursor),
            }
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}
