use crate::parser::{BoxParser, Parser};
use crate::reply::Reply;
use crate::token::Token;
use std::cell::RefCell;
use std::rc::Rc;

/// A forward-declared parser for self-referential and mutually recursive
/// grammars
///
/// The handle wraps a replaceable cell holding its behavior. `promise` hands
/// the still-empty handle to the builder so the returned grammar can embed
/// clones of it, then installs the returned parser into the cell. The
/// recursive reference is therefore resolved at run time through the cell,
/// with no unbounded construction-time recursion.
///
/// Clones share the cell. Running a handle whose definition was never
/// installed is a construction bug and panics.
pub struct Promise<Tok: Token, T> {
    cell: Rc<RefCell<Option<BoxParser<'static, Tok, T>>>>,
}

impl<Tok: Token, T> Promise<Tok, T> {
    fn undefined() -> Self {
        Promise {
            cell: Rc::new(RefCell::new(None)),
        }
    }
}

impl<Tok: Token, T> Clone for Promise<Tok, T> {
    fn clone(&self) -> Self {
        Promise {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<Tok: Token, T> Parser<Tok> for Promise<Tok, T> {
    type Output = T;

    fn run(&self, cursor: usize, input: &[Tok]) -> Reply<Tok, T> {
        let cell = self.cell.borrow();
        match cell.as_ref() {
            Some(parser) => parser.run(cursor, input),
            None => panic!("recursive parser was run before its definition was installed"),
        }
    }
}

/// Build a recursive parser
///
/// `build` receives the not-yet-defined handle and returns the parser to
/// install on it; the handle (and any clones taken inside `build`) then
/// behaves as that parser.
///
/// ```
/// use tokparse::{Parser, ThenExt, ManyExt, MapExt, literal, promise};
///
/// // balanced parentheses: S = ( "(" S ")" )*
/// let balanced = promise(|this: tokparse::Promise<char, ()>| {
///     this.clone()
///         .bracketed(literal('('), literal(')'))
///         .many()
///         .to(())
/// });
/// assert!(balanced.parse(&['(', '(', ')', ')']).is_ok());
/// assert!(balanced.parse(&['(', '(']).is_err());
/// ```
pub fn promise<Tok, T, P, F>(build: F) -> Promise<Tok, T>
where
    Tok: Token + 'static,
    T: 'static,
    P: Parser<Tok, Output = T> + 'static,
    F: FnOnce(Promise<Tok, T>) -> P,
{
    let handle = Promise::undefined();
    let parser = build(handle.clone());
    *handle.cell.borrow_mut() = Some(Box::new(parser));
    handle
}
