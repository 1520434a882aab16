use crate::error::ParseError;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;
use std::marker::PhantomData;

/// Parser that always fails without consuming input
///
/// The failure is unanchored: if it becomes the final report, the driver pins
/// it at the parse start position.
pub struct Fail<T> {
    reason: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(reason: Option<String>) -> Self {
        Fail {
            reason,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        Fail {
            reason: self.reason.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Tok: Token, T> Parser<Tok> for Fail<T> {
    type Output = T;

    fn run(&self, _cursor: usize, _input: &[Tok]) -> Reply<Tok, T> {
        let error = match &self.reason {
            Some(reason) => ParseError::reason(reason.clone()),
            None => ParseError::empty(),
        };
        Reply::EmptyErr { error }
    }
}

/// Parser that always fails with no message
pub fn fail<T>() -> Fail<T> {
    Fail::new(None)
}

/// Parser that always fails with the given free-text reason
pub fn fail_with<T>(reason: impl Into<String>) -> Fail<T> {
    Fail::new(Some(reason.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_reports_syntax_error() {
        let parser: Fail<char> = fail();
        let error = parser.parse(&['a']).unwrap_err();
        assert_eq!(error.format(), "syntax error");
        assert_eq!(error.position(), Some(0));
    }

    #[test]
    fn test_fail_with_reason() {
        let parser: Fail<char> = fail_with("not supported");
        let error = parser.parse(&[] as &[char]).unwrap_err();
        assert_eq!(error.format(), "not supported");
        assert!(error.expected().is_empty());
    }

    #[test]
    fn test_fail_anchors_at_start_position() {
        let parser: Fail<char> = fail_with("boom");
        let error = parser.parse_at(&['a', 'b', 'c'], 2).unwrap_err();
        assert_eq!(error.position(), Some(2));
    }
}
