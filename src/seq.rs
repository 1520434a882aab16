use crate::parser::Parser;
use crate::reply::Reply;
use crate::token::Token;

/// First step of a sequence fold: wrap a parser's value in a one-element
/// sequence
#[derive(Clone)]
pub struct Begin<P> {
    parser: P,
}

impl<P> Begin<P> {
    pub fn new(parser: P) -> Self {
        Begin { parser }
    }
}

impl<Tok, P> Parser<Tok> for Begin<P>
where
    Tok: Token,
    P: Parser<Tok>,
{
    type Output = Vec<P::Output>;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Vec<P::Output>> {
        self.parser.run(cursor, input).map_value(|value| vec![value])
    }
}

/// Fold step of a sequence: run the accumulated sequence parser, then the
/// next parser, appending its value
///
/// Commit semantics follow sequencing: once the accumulated part consumed,
/// a failure of the next parser is committed.
#[derive(Clone)]
pub struct Append<P1, P2> {
    sequence: P1,
    next: P2,
}

impl<P1, P2> Append<P1, P2> {
    pub fn new(sequence: P1, next: P2) -> Self {
        Append { sequence, next }
    }
}

impl<Tok, P1, P2, T> Parser<Tok> for Append<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok, Output = Vec<T>>,
    P2: Parser<Tok, Output = T>,
{
    type Output = Vec<T>;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Vec<T>> {
        match self.sequence.run(cursor, input) {
            Reply::EmptyOk { value: mut values, .. } => {
                self.next.run(cursor, input).map_value(|value| {
                    values.push(value);
                    values
                })
            }
            Reply::EmptyErr { error } => Reply::EmptyErr { error },
            Reply::ConsumedOk {
                value: mut values,
                expected,
                cursor: mid,
            } => match self.next.run(mid, input) {
                Reply::EmptyOk { value, error } => {
                    values.push(value);
                    Reply::ConsumedOk {
                        value: values,
                        expected: expected.union(error.into_expected()),
                        cursor: mid,
                    }
                }
                Reply::ConsumedOk {
                    value,
                    expected,
                    cursor,
                } => {
                    values.push(value);
                    Reply::ConsumedOk {
                        value: values,
                        expected,
                        cursor,
                    }
                }
                Reply::EmptyErr { error } | Reply::ConsumedErr { error } => {
                    Reply::ConsumedErr { error }
                }
            },
            Reply::ConsumedErr { error } => Reply::ConsumedErr { error },
        }
    }
}

/// Convenience function to create a Begin parser
pub fn begin<Tok, P>(parser: P) -> Begin<P>
where
    Tok: Token,
    P: Parser<Tok>,
{
    Begin::new(parser)
}

/// Convenience function to create an Append parser
pub fn append<Tok, P1, P2, T>(sequence: P1, next: P2) -> Append<P1, P2>
where
    Tok: Token,
    P1: Parser<Tok, Output = Vec<T>>,
    P2: Parser<Tok, Output = T>,
{
    Append::new(sequence, next)
}

/// Left-fold a list of parsers into one that runs them in order and collects
/// their values
///
/// Every parser must produce the same value type; use
/// [`lift`](crate::literal::lift) to turn bare tokens into parsers at the
/// call site.
///
/// ```
/// use tokparse::{Parser, seq, lift, literal};
///
/// let assign = seq![lift("x"), lift("="), literal("1")];
/// assert_eq!(assign.parse(&["x", "=", "1"]), Ok(vec!["x", "=", "1"]));
/// ```
#[macro_export]
macro_rules! seq {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let parser = $crate::seq::Begin::new($first);
        $(let parser = $crate::seq::Append::new(parser, $rest);)*
        parser
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::{lift, literal};
    use crate::or::OrExt;

    #[test]
    fn test_seq_collects_in_order() {
        let parser = seq![literal('a'), literal('b'), literal('c')];
        assert_eq!(parser.parse(&['a', 'b', 'c']), Ok(vec!['a', 'b', 'c']));
    }

    #[test]
    fn test_seq_single_element() {
        let parser = seq![literal('a')];
        assert_eq!(parser.parse(&['a']), Ok(vec!['a']));
    }

    #[test]
    fn test_seq_fails_on_first_mismatch() {
        let parser = seq![literal('a'), literal('b')];
        let error = parser.parse(&['a', 'x']).unwrap_err();
        assert_eq!(error.format(), "expected b");
        assert_eq!(error.position(), Some(1));
    }

    #[test]
    fn test_seq_with_lifted_tokens() {
        let parser = seq![lift("let"), lift("x")];
        assert_eq!(parser.parse(&["let", "x"]), Ok(vec!["let", "x"]));
    }

    #[test]
    fn test_seq_commits_after_consuming() {
        // the right alternative is never tried once "a" is consumed
        let parser = seq![lift("a"), lift("b")].or(seq![lift("a"), lift("c")]);
        let error = parser.parse(&["a", "d"]).unwrap_err();
        assert_eq!(error.format(), "expected b");
    }

    #[test]
    fn test_function_syntax() {
        let parser = append(begin(literal('x')), literal('y'));
        assert_eq!(parser.parse(&['x', 'y']), Ok(vec!['x', 'y']));
    }
}
