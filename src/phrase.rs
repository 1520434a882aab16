use crate::error::{ParseError, Tag};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that requires the whole remaining input to be consumed
///
/// Behaves exactly like binding into `eof` while keeping the inner value:
/// success at any position short of the end becomes an end-of-input
/// expectation failure, committed if the inner parser had consumed.
#[derive(Clone)]
pub struct Phrase<P> {
    parser: P,
}

impl<P> Phrase<P> {
    pub fn new(parser: P) -> Self {
        Phrase { parser }
    }
}

impl<Tok, P> Parser<Tok> for Phrase<P>
where
    Tok: Token,
    P: Parser<Tok>,
{
    type Output = P::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, P::Output> {
        match self.parser.run(cursor, input) {
            Reply::EmptyOk { value, .. } => {
                if cursor == input.len() {
                    Reply::EmptyOk {
                        value,
                        error: ParseError::empty(),
                    }
                } else {
                    Reply::EmptyErr {
                        error: ParseError::expect("EOF", Tag::EndOfInput, cursor),
                    }
                }
            }
            Reply::ConsumedOk {
                value,
                expected,
                cursor: end,
            } => {
                if end == input.len() {
                    Reply::ConsumedOk {
                        value,
                        expected,
                        cursor: end,
                    }
                } else {
                    Reply::ConsumedErr {
                        error: ParseError::expect("EOF", Tag::EndOfInput, end),
                    }
                }
            }
            failure => failure,
        }
    }
}

/// Extension trait to add .phrase() method support for parsers
pub trait PhraseExt<Tok: Token>: Parser<Tok> + Sized {
    fn phrase(self) -> Phrase<Self> {
        Phrase::new(self)
    }
}

impl<Tok: Token, P> PhraseExt<Tok> for P where P: Parser<Tok> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::many::ManyExt;

    #[test]
    fn test_phrase_accepts_full_input() {
        let parser = literal('a').many().phrase();
        assert_eq!(parser.parse(&['a', 'a']), Ok(vec!['a', 'a']));
    }

    #[test]
    fn test_phrase_rejects_leftover_input() {
        let parser = literal('a').many().phrase();
        let error = parser.parse(&['a', 'b']).unwrap_err();
        assert_eq!(error.format(), "expected EOF");
        assert_eq!(error.position(), Some(1));
    }

    #[test]
    fn test_phrase_keeps_inner_value() {
        let parser = literal("x").phrase();
        assert_eq!(parser.parse(&["x"]), Ok("x"));
    }
}
