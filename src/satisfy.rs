use crate::error::{ParseError, Tag};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// Parser that matches a single token satisfying a predicate
///
/// End of input is reported through the same expectation mechanism as a
/// mismatch, not as a distinct error kind.
#[derive(Clone)]
pub struct Satisfy<Tok: Token, F> {
    predicate: F,
    label: String,
    tag: Tag<Tok>,
}

impl<Tok: Token, F> Satisfy<Tok, F> {
    pub fn new(predicate: F, label: String, tag: Tag<Tok>) -> Self {
        Satisfy {
            predicate,
            label,
            tag,
        }
    }
}

impl<Tok: Token, F> Parser<Tok> for Satisfy<Tok, F>
where
    F: Fn(&Tok) -> bool,
{
    type Output = Tok;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Tok> {
        match input.get(cursor) {
            Some(token) if (self.predicate)(token) => Reply::ConsumedOk {
                value: token.clone(),
                expected: Default::default(),
                cursor: cursor + 1,
            },
            _ => Reply::EmptyErr {
                error: ParseError::expect(self.label.clone(), self.tag.clone(), cursor),
            },
        }
    }
}

/// Match a token satisfying `predicate`, labelled for diagnostics
pub fn satisfy<Tok, F>(predicate: F, label: impl Into<String>) -> Satisfy<Tok, F>
where
    Tok: Token,
    F: Fn(&Tok) -> bool,
{
    let label = label.into();
    let tag = Tag::Named(label.clone());
    Satisfy::new(predicate, label, tag)
}

/// Match a token satisfying `predicate`, with an explicit diagnostic tag
pub fn satisfy_tagged<Tok, F>(
    predicate: F,
    label: impl Into<String>,
    tag: Tag<Tok>,
) -> Satisfy<Tok, F>
where
    Tok: Token,
    F: Fn(&Tok) -> bool,
{
    Satisfy::new(predicate, label.into(), tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfy_match_consumes_one_token() {
        let parser = satisfy(|token: &char| token.is_ascii_digit(), "digit");
        match parser.run(0, &['7', 'x']) {
            Reply::ConsumedOk {
                value,
                cursor,
                expected,
            } => {
                assert_eq!(value, '7');
                assert_eq!(cursor, 1);
                assert!(expected.is_empty());
            }
            reply => panic!("unexpected reply: {:?}", reply),
        }
    }

    #[test]
    fn test_satisfy_mismatch_fails_without_consuming() {
        let parser = satisfy(|token: &char| token.is_ascii_digit(), "digit");
        match parser.run(0, &['x']) {
            Reply::EmptyErr { error } => {
                assert_eq!(error.position(), Some(0));
                assert!(error.expected().contains("digit"));
                assert_eq!(
                    error.expected().get("digit"),
                    Some(&Tag::Named("digit".into()))
                );
            }
            reply => panic!("unexpected reply: {:?}", reply),
        }
    }

    #[test]
    fn test_satisfy_end_of_input_is_a_mismatch() {
        let parser = satisfy(|token: &char| token.is_ascii_digit(), "digit");
        let error = parser.parse_at(&['1'], 1).unwrap_err();
        assert_eq!(error.format(), "expected digit");
        assert_eq!(error.position(), Some(1));
    }

    #[test]
    fn test_satisfy_tagged_carries_custom_tag() {
        let parser = satisfy_tagged(|token: &char| *token == ';', ";", Tag::Literal(';'));
        let error = parser.parse(&['x']).unwrap_err();
        assert_eq!(error.expected().get(";"), Some(&Tag::Literal(';')));
    }
}
