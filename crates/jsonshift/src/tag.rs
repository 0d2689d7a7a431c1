//! Symbol tags.
//!
//! A [`Tag`] classifies every token that lives on the parse stack. Terminals
//! come out of the lexer; nonterminals are only ever produced by reduction.
//! The derived ordering exists for display and map keys, it carries no
//! grammatical meaning.

use core::fmt;

/// The classification of a token, terminal or nonterminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Tag {
    /// `(\t | \n | \r | ' ')+`
    Space,
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    Number,
    /// `" ... "`, escapes left as written.
    String,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// End of input.
    End,
    /// `value End`, the accepting symbol.
    Document,
    /// `object | array | String | Number | True | False | Null`
    Value,
    /// `{ }` or `{ members }`
    Object,
    /// `[ ]` or `[ values ]`
    Array,
    /// `members , member` or `member`
    Members,
    /// `String : value`
    Member,
    /// `values , value` or `value`
    Values,
    /// A lexical error token, or the generic syntax-error symbol.
    Error,
}

impl Tag {
    /// Returns `true` for tags the lexer can produce.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(
            self,
            Tag::Document
                | Tag::Value
                | Tag::Object
                | Tag::Array
                | Tag::Members
                | Tag::Member
                | Tag::Values
        )
    }

    /// The human readable name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Space => "SPACE",
            Tag::Number => "NUMBER",
            Tag::String => "STRING",
            Tag::True => "true",
            Tag::False => "false",
            Tag::Null => "null",
            Tag::OpenBracket => "[",
            Tag::CloseBracket => "]",
            Tag::OpenBrace => "{",
            Tag::CloseBrace => "}",
            Tag::Comma => ",",
            Tag::Colon => ":",
            Tag::End => "EOF",
            Tag::Document => "JSON",
            Tag::Value => "value",
            Tag::Object => "object",
            Tag::Array => "array",
            Tag::Members => "members",
            Tag::Member => "member",
            Tag::Values => "values",
            Tag::Error => "syntax error",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
