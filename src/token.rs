use std::fmt;

/// Contract every input element must satisfy
///
/// Tokens are compared by equality, cloned into values and error reports,
/// and rendered with `Display` when a failed literal match names the token
/// it wanted. Any type with these capabilities is a token; `char`, `&str`
/// and `String` qualify out of the box.
pub trait Token: Clone + PartialEq + fmt::Debug + fmt::Display {}

impl<T> Token for T where T: Clone + PartialEq + fmt::Debug + fmt::Display {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_token<Tok: Token>(token: Tok) -> Tok {
        token
    }

    #[test]
    fn test_common_types_are_tokens() {
        assert_eq!(assert_token('a'), 'a');
        assert_eq!(assert_token("word"), "word");
        assert_eq!(assert_token(String::from("word")), "word");
    }

    #[test]
    fn test_custom_types_are_tokens() {
        #[derive(Clone, PartialEq, Debug)]
        enum Lexeme {
            Plus,
        }

        impl fmt::Display for Lexeme {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Lexeme::Plus => write!(f, "+"),
                }
            }
        }

        assert_eq!(assert_token(Lexeme::Plus), Lexeme::Plus);
    }
}
