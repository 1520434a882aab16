use crate::error::Expected;
use crate::or::Or;
use crate::parser::Parser;
use crate::pure::Pure;
use crate::reply::Reply;
use crate::token::Token;

/// Parser combinator that matches one or more occurrences of an item parser
/// separated by a separator parser
///
/// Equivalent to the item followed by an iterative repetition of
/// separator-then-item; the separator values are discarded. The repetition
/// stops when separator-then-item fails without consuming; a committed
/// failure inside either part propagates. If an entire separator-then-item
/// round succeeds without consuming anything the grammar can never terminate,
/// which panics like [`Many`](crate::many::Many).
#[derive(Clone)]
pub struct SepBy1<P, S> {
    item: P,
    separator: S,
}

impl<P, S> SepBy1<P, S> {
    pub fn new(item: P, separator: S) -> Self {
        SepBy1 { item, separator }
    }
}

impl<Tok, P, S> Parser<Tok> for SepBy1<P, S>
where
    Tok: Token,
    P: Parser<Tok>,
    S: Parser<Tok>,
{
    type Output = Vec<P::Output>;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, Vec<P::Output>> {
        let mut at = cursor;
        let mut consumed = false;
        let mut context = Expected::new();

        let mut values = match self.item.run(at, input) {
            Reply::EmptyOk { value, error } => {
                context = error.into_expected();
                vec![value]
            }
            Reply::ConsumedOk {
                value,
                expected,
                cursor,
            } => {
                at = cursor;
                consumed = true;
                context = expected;
                vec![value]
            }
            Reply::EmptyErr { error } => return Reply::EmptyErr { error },
            Reply::ConsumedErr { error } => return Reply::ConsumedErr { error },
        };

        loop {
            let (sep_consumed, sep_cursor) = match self.separator.run(at, input) {
                Reply::EmptyOk { .. } => (false, at),
                Reply::ConsumedOk { cursor, .. } => (true, cursor),
                Reply::EmptyErr { error } => {
                    return finish(values, consumed, at, context, error);
                }
                Reply::ConsumedErr { error } => return Reply::ConsumedErr { error },
            };

            match self.item.run(sep_cursor, input) {
                Reply::EmptyOk { value, error } => {
                    if !sep_consumed {
                        panic!(
                            "repetition applied to a parser that succeeds without consuming input"
                        );
                    }
                    values.push(value);
                    at = sep_cursor;
                    consumed = true;
                    context = error.into_expected();
                }
                Reply::ConsumedOk {
                    value,
                    expected,
                    cursor,
                } => {
                    values.push(value);
                    at = cursor;
                    consumed = true;
                    context = expected;
                }
                Reply::EmptyErr { error } => {
                    if sep_consumed {
                        // the separator committed this round
                        return Reply::ConsumedErr { error };
                    }
                    return finish(values, consumed, at, context, error);
                }
                Reply::ConsumedErr { error } => return Reply::ConsumedErr { error },
            }
        }
    }
}

fn finish<Tok: Token, T>(
    values: Vec<T>,
    consumed: bool,
    at: usize,
    context: Expected<Tok>,
    error: crate::error::ParseError<Tok>,
) -> Reply<Tok, Vec<T>> {
    if consumed {
        Reply::ConsumedOk {
            value: values,
            expected: context.union(error.into_expected()),
            cursor: at,
        }
    } else {
        Reply::EmptyOk {
            value: values,
            error,
        }
    }
}

/// Extension trait to add .sep_by()/.sep_by1() method support for parsers
pub trait SepByExt<Tok: Token>: Parser<Tok> + Sized {
    /// One or more occurrences of `self` separated by `separator`
    fn sep_by1<S>(self, separator: S) -> SepBy1<Self, S>
    where
        S: Parser<Tok>,
    {
        SepBy1::new(self, separator)
    }

    /// Zero or more occurrences of `self` separated by `separator`
    fn sep_by<S>(self, separator: S) -> Or<SepBy1<Self, S>, Pure<Vec<Self::Output>>>
    where
        S: Parser<Tok>,
        Self::Output: Clone,
    {
        Or::new(SepBy1::new(self, separator), Pure::new(Vec::new()))
    }
}

impl<Tok: Token, P> SepByExt<Tok> for P where P: Parser<Tok> {}
