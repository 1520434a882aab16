//! # tokparse - Parser Combinators for Token Streams
//!
//! A parser combinator library for pre-tokenized input: any finite,
//! random-access slice of equality-comparable tokens. Small primitive
//! parsers combine into parsers for arbitrarily complex grammars, with
//! Parsec-style commit semantics and positionally precise error messages.
//!
//! - **No implicit backtracking past consumed input**: a failure after the
//!   cursor advanced commits; only an explicit `attempt` restores the
//!   alternative. This keeps alternation linear instead of exponential.
//! - **Farthest-progress diagnostics**: when several branches fail, the
//!   error anchored deepest into the input is reported, with the
//!   expectations of equally deep branches merged into one message.
//! - **Longest-match ambiguity resolution**: `race` runs two
//!   interpretations of the same input and keeps whichever consumed more.
//! - **Value-threaded errors**: failures travel as plain values through the
//!   [`Reply`] protocol; `parse` turns the final one into a `Result::Err`
//!   and `next` returns a structured outcome without ever failing.
//!
//! ```
//! use tokparse::{Parser, MapExt, SepByExt, literal, satisfy};
//!
//! let tokens = ["1", ",", "2", ",", "3"];
//! let number = satisfy(|t: &&str| t.chars().all(|c| c.is_ascii_digit()), "number")
//!     .map(|t| t.parse::<i64>().unwrap());
//! let list = number.sep_by1(literal(","));
//! assert_eq!(list.parse(&tokens), Ok(vec![1, 2, 3]));
//! ```

pub mod apply;
pub mod attempt;
pub mod bind;
pub mod desc;
pub mod eof;
pub mod error;
pub mod fail;
pub mod literal;
pub mod many;
pub mod map;
pub mod or;
pub mod parser;
pub mod phrase;
pub mod promise;
pub mod pure;
pub mod race;
pub mod reply;
pub mod satisfy;
pub mod sep_by;
pub mod seq;
pub mod then;
pub mod token;

pub use apply::{Apply, ApplyExt, Foldr1};
pub use attempt::{Attempt, AttemptExt};
pub use bind::{Bind, BindExt, bind};
pub use desc::{Desc, DescExt};
pub use eof::{Eof, eof};
pub use error::{Expected, ParseError, Tag};
pub use fail::{Fail, fail, fail_with};
pub use literal::{Literal, lift, literal};
pub use many::{Many, ManyAccum, ManyExt, many};
pub use map::{Map, MapExt, To, map};
pub use or::{Or, OrExt, or};
pub use parser::{BoxParser, Next, Parser};
pub use phrase::{Phrase, PhraseExt};
pub use promise::{Promise, promise};
pub use pure::{Pure, pure};
pub use race::{Race, RaceExt, race};
pub use reply::Reply;
pub use satisfy::{Satisfy, satisfy, satisfy_tagged};
pub use sep_by::{SepBy1, SepByExt};
pub use seq::{Append, Begin, append, begin};
pub use then::{Skip, Then, ThenExt};
pub use token::Token;
