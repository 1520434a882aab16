use crate::token::Token;
use std::collections::BTreeMap;
use thiserror::Error;

/// Diagnostic marker describing what was expected at a failure point
///
/// Tags are carried for display and for identity under an expectation label;
/// the engine never inspects them otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag<Tok: Token> {
    /// An exact token was expected
    Literal(Tok),
    /// End of the input sequence was expected
    EndOfInput,
    /// A caller-named expectation, from `satisfy` labels or `desc`
    Named(String),
}

impl<Tok: Token> std::fmt::Display for Tag<Tok> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Literal(token) => write!(f, "{}", token),
            Tag::EndOfInput => write!(f, "end of input"),
            Tag::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Set of expectations, keyed by human-facing label
///
/// Keys are unique. The set is a value: it is never mutated in place by the
/// engine, only combined with `union`, which consumes both sides. Labels
/// iterate in lexicographic order, so diagnostic text is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Expected<Tok: Token> {
    entries: BTreeMap<String, Tag<Tok>>,
}

impl<Tok: Token> Expected<Tok> {
    /// Create an empty expectation set
    pub fn new() -> Self {
        Expected {
            entries: BTreeMap::new(),
        }
    }

    /// Create a set holding a single labelled tag
    pub fn singleton(label: impl Into<String>, tag: Tag<Tok>) -> Self {
        let mut entries = BTreeMap::new();
        let _ = entries.insert(label.into(), tag);
        Expected { entries }
    }

    /// Union two sets; on a label collision the right-hand tag wins
    pub fn union(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn get(&self, label: &str) -> Option<&Tag<Tok>> {
        self.entries.get(label)
    }

    /// Iterate over the labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over label/tag pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag<Tok>)> {
        self.entries.iter().map(|(label, tag)| (label.as_str(), tag))
    }
}

impl<Tok: Token> Default for Expected<Tok> {
    fn default() -> Self {
        Expected::new()
    }
}

/// A parse failure: free-text reasons, an expectation set, and an optional
/// position in the input
///
/// `position: None` means the error does not yet pin a location (e.g. it came
/// from `fail` or an `attempt` rewrite); a driver anchors it at the start
/// position if it becomes the final report. Errors are immutable values:
/// every operation consumes and returns.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", render(.reasons, .expected))]
pub struct ParseError<Tok: Token> {
    reasons: Vec<String>,
    expected: Expected<Tok>,
    position: Option<usize>,
}

/// Produce the diagnostic text for a reasons/expected pair
///
/// Exact format: reasons joined with ", "; "syntax error" when there is
/// nothing at all; otherwise "expected " plus the comma-joined labels,
/// appended after the reasons when both are present.
fn render<Tok: Token>(reasons: &[String], expected: &Expected<Tok>) -> String {
    let head = reasons.join(", ");
    if expected.is_empty() {
        if head.is_empty() {
            "syntax error".to_string()
        } else {
            head
        }
    } else {
        let labels = expected.labels().collect::<Vec<_>>().join(", ");
        if head.is_empty() {
            format!("expected {}", labels)
        } else {
            format!("{}, expected {}", head, labels)
        }
    }
}

impl<Tok: Token> ParseError<Tok> {
    /// The error carrying no information at all (used as the "no failure yet"
    /// value on empty successes)
    pub fn empty() -> Self {
        ParseError {
            reasons: Vec::new(),
            expected: Expected::new(),
            position: None,
        }
    }

    /// An unanchored free-text failure, as produced by `fail`
    pub fn reason(text: impl Into<String>) -> Self {
        ParseError {
            reasons: vec![text.into()],
            expected: Expected::new(),
            position: None,
        }
    }

    /// An expectation mismatch anchored at the failing cursor
    pub fn expect(label: impl Into<String>, tag: Tag<Tok>, at: usize) -> Self {
        ParseError {
            reasons: Vec::new(),
            expected: Expected::singleton(label, tag),
            position: Some(at),
        }
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn expected(&self) -> &Expected<Tok> {
        &self.expected
    }

    pub fn into_expected(self) -> Expected<Tok> {
        self.expected
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Return a copy pinned at the given position
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Pin at the given position only if the error is still unanchored
    pub fn anchor(mut self, position: usize) -> Self {
        let _ = self.position.get_or_insert(position);
        self
    }

    /// Replace the expectation set, keeping reasons and position
    pub fn with_expected(mut self, expected: Expected<Tok>) -> Self {
        self.expected = expected;
        self
    }

    /// Farthest-progress merge
    ///
    /// An error anchored strictly further into the input wins outright; an
    /// anchored error supersedes an unanchored one. At equal positions (both
    /// anchored at the same cursor, or both unanchored) reasons concatenate
    /// left-then-right and expectations union with right-hand tags winning.
    pub fn merge(mut self, other: Self) -> Self {
        match (self.position, other.position) {
            (Some(left), Some(right)) if left > right => self,
            (Some(left), Some(right)) if right > left => other,
            (Some(_), None) => self,
            (None, Some(_)) => other,
            _ => {
                self.reasons.extend(other.reasons);
                ParseError {
                    reasons: self.reasons,
                    expected: self.expected.union(other.expected),
                    position: self.position,
                }
            }
        }
    }

    /// The human-readable message (same text as the `Display` impl)
    pub fn format(&self) -> String {
        render(&self.reasons, &self.expected)
    }
}
