//! The fixed grammar and the terminal-to-event table.
//!
//! Both tables are immutable statics shared by every parser instance.
//!
//! ```text
//! document -> value EOF
//! document -> ERROR
//! value    -> object | array | STRING | NUMBER | true | false | null
//! object   -> '{' '}' | '{' members '}'
//! array    -> '[' ']' | '[' values ']'
//! member   -> STRING ':' value
//! members  -> member | members ',' member
//! values   -> value | values ',' value
//! ```

use core::fmt;

use crate::Tag;

/// Length of the longest right-hand side in [`RULES`].
///
/// Only sizes the context window of structural diagnostics; matching never
/// depends on it.
pub const MAX_RULE_LEN: usize = 3;

/// A production: `result -> rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// The symbol a full match reduces to.
    pub result: Tag,
    /// The tag sequence that must appear on top of the stack.
    pub rhs: &'static [Tag],
}

impl Rule {
    #[must_use]
    pub(crate) const fn new(result: Tag, rhs: &'static [Tag]) -> Self {
        Self { result, rhs }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.result)?;
        for tag in self.rhs {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}

/// Every production of the grammar, in declaration order.
///
/// Declaration order only breaks ties between equally ranked candidates.
/// `document -> ERROR` never fires: lexical-error tokens are not shifted.
pub static RULES: [Rule; 18] = [
    Rule::new(Tag::Value, &[Tag::Object]),
    Rule::new(Tag::Value, &[Tag::Array]),
    Rule::new(Tag::Value, &[Tag::String]),
    Rule::new(Tag::Value, &[Tag::Number]),
    Rule::new(Tag::Value, &[Tag::True]),
    Rule::new(Tag::Value, &[Tag::False]),
    Rule::new(Tag::Value, &[Tag::Null]),
    Rule::new(Tag::Document, &[Tag::Error]),
    Rule::new(Tag::Values, &[Tag::Value]),
    Rule::new(Tag::Members, &[Tag::Member]),
    Rule::new(Tag::Object, &[Tag::OpenBrace, Tag::CloseBrace]),
    Rule::new(Tag::Array, &[Tag::OpenBracket, Tag::CloseBracket]),
    Rule::new(Tag::Document, &[Tag::Value, Tag::End]),
    Rule::new(Tag::Object, &[Tag::OpenBrace, Tag::Members, Tag::CloseBrace]),
    Rule::new(Tag::Array, &[Tag::OpenBracket, Tag::Values, Tag::CloseBracket]),
    Rule::new(Tag::Member, &[Tag::String, Tag::Colon, Tag::Value]),
    Rule::new(Tag::Values, &[Tag::Values, Tag::Comma, Tag::Value]),
    Rule::new(Tag::Members, &[Tag::Members, Tag::Comma, Tag::Member]),
];

/// The sink notification a terminal triggers as soon as it is lexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalEvent {
    /// A whitespace run.
    Space,
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// `{`
    StartObject,
    /// `}`
    EndObject,
    /// `[`
    StartArray,
    /// `]`
    EndArray,
    /// A string literal.
    String,
    /// A number literal.
    Number,
    /// `,`
    NextElement,
    /// `:`
    MemberValue,
}

/// Looks up the lexical event registered for `tag`, if any.
#[must_use]
pub const fn lexical_event(tag: Tag) -> Option<LexicalEvent> {
    Some(match tag {
        Tag::Space => LexicalEvent::Space,
        Tag::Null => LexicalEvent::Null,
        Tag::True | Tag::False => LexicalEvent::Boolean,
        Tag::OpenBrace => LexicalEvent::StartObject,
        Tag::CloseBrace => LexicalEvent::EndObject,
        Tag::OpenBracket => LexicalEvent::StartArray,
        Tag::CloseBracket => LexicalEvent::EndArray,
        Tag::String => LexicalEvent::String,
        Tag::Number => LexicalEvent::Number,
        Tag::Comma => LexicalEvent::NextElement,
        Tag::Colon => LexicalEvent::MemberValue,
        _ => return None,
    })
}
