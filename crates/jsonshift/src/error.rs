use core::fmt;
use std::io;

use thiserror::Error;

use crate::Token;

/// A hard failure of a feed call.
///
/// Malformed documents never produce one; those are reported through
/// [`Sink::error`](crate::Sink::error) as [`Diagnostic`]s.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The reader failed while the document was being consumed.
    #[error("failed to read JSON document: {0}")]
    Io(#[from] io::Error),
}

/// A problem reported to the sink. Never fatal to the feed loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The input held no characters at all.
    EmptyDocument,
    /// The lexer could not form a valid token.
    Syntax(Token),
    /// The token sequence cannot be reduced to a document. Holds the stack
    /// tokens around the failure, bottom first.
    Parse(Vec<Token>),
}

impl Diagnostic {
    /// Where the problem is reported: `(0, 0)` for an empty document,
    /// otherwise the first token involved.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        match self {
            Diagnostic::EmptyDocument => (0, 0),
            Diagnostic::Syntax(token) => (token.line, token.column),
            Diagnostic::Parse(context) => context
                .first()
                .map_or((0, 0), |token| (token.line, token.column)),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyDocument => f.write_str("empty or illegal JSON document"),
            Diagnostic::Syntax(token) => write!(f, "JSON {} at '{}'", token.tag, token.text),
            Diagnostic::Parse(context) => {
                f.write_str("JSON parse error at")?;
                for token in context {
                    write!(f, " '{}' =:: {}", token.text, token.tag)?;
                }
                Ok(())
            }
        }
    }
}

impl core::error::Error for Diagnostic {}
