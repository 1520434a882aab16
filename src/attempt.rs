use crate::error::ParseError;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that rewrites a committed failure into a retryable one
///
/// This is the only way to undo the no-backtracking-past-consumed-input rule.
/// The rewrite discards the original diagnostic (position and expectations);
/// `attempt_with` substitutes a free-text reason, plain `attempt` leaves the
/// failure silent so a surrounding alternation supplies the message.
#[derive(Clone)]
pub struct Attempt<P> {
    parser: P,
    reason: Option<String>,
}

impl<P> Attempt<P> {
    pub fn new(parser: P, reason: Option<String>) -> Self {
        Attempt { parser, reason }
    }
}

impl<Tok, P> Parser<Tok> for Attempt<P>
where
    Tok: Token,
    P: Parser<Tok>,
{
    type Output = P::Output;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, P::Output> {
        match self.parser.run(cursor, input) {
            Reply::ConsumedErr { .. } => {
                let error = match &self.reason {
                    Some(reason) => ParseError::reason(reason.clone()),
                    None => ParseError::empty(),
                };
                Reply::EmptyErr { error }
            }
            reply => reply,
        }
    }
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<Tok: Token>: Parser<Tok> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self, None)
    }

    fn attempt_with(self, reason: impl Into<String>) -> Attempt<Self> {
        Attempt::new(self, Some(reason.into()))
    }
}

impl<Tok: Token, P> AttemptExt<Tok> for P where P: Parser<Tok> {}
