use crate::error::{Expected, ParseError};
use crate::token::Token;

/// Outcome of running a parser at a cursor
///
/// This is the tagged-union form of the success/failure x consumed/empty
/// protocol. Every parser produces exactly one variant per run:
///
/// - `EmptyOk`: succeeded without advancing; carries the best failure that
///   would have occurred had it not succeeded, for merging into alternation
///   diagnostics later. It is not an actual failure.
/// - `EmptyErr`: failed without advancing; alternation may backtrack here.
/// - `ConsumedOk`: succeeded after advancing to `cursor`; carries the tags
///   that could have extended the match further from there.
/// - `ConsumedErr`: failed after advancing. This is a committed failure:
///   ordinary alternation must not retry past it, only `attempt` can rewrite
///   it back into a retryable `EmptyErr`.
#[derive(Debug, Clone)]
pub enum Reply<Tok: Token, T> {
    EmptyOk {
        value: T,
        error: ParseError<Tok>,
    },
    EmptyErr {
        error: ParseError<Tok>,
    },
    ConsumedOk {
        value: T,
        expected: Expected<Tok>,
        cursor: usize,
    },
    ConsumedErr {
        error: ParseError<Tok>,
    },
}

impl<Tok: Token, T> Reply<Tok, T> {
    /// Transform the value in either success variant, leaving failures and
    /// all diagnostic context untouched
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Reply<Tok, U> {
        match self {
            Reply::EmptyOk { value, error } => Reply::EmptyOk {
                value: f(value),
                error,
            },
            Reply::EmptyErr { error } => Reply::EmptyErr { error },
            Reply::ConsumedOk {
                value,
                expected,
                cursor,
            } => Reply::ConsumedOk {
                value: f(value),
                expected,
                cursor,
            },
            Reply::ConsumedErr { error } => Reply::ConsumedErr { error },
        }
    }

    /// True for either success variant
    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::EmptyOk { .. } | Reply::ConsumedOk { .. })
    }

    /// True if the run advanced the cursor, whether it succeeded or not
    pub fn consumed(&self) -> bool {
        matches!(self, Reply::ConsumedOk { .. } | Reply::ConsumedErr { .. })
    }
}
