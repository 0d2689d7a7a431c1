use core::fmt;

use crate::Tag;

/// A positioned, tagged piece of source text.
///
/// Terminals carry the exact characters the lexer consumed. A token produced
/// by reduction carries the concatenated text of everything it absorbed and
/// the position of its first constituent. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Token {
    /// What kind of symbol this is.
    pub tag: Tag,
    /// Source text covered by the token.
    pub text: String,
    /// Line of the first character.
    pub line: usize,
    /// Column of the first character.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(tag: Tag, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            tag,
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {}: {}", self.line, self.column, self.tag, self.text)
    }
}
