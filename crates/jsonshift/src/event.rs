//! Owned records of sink calls.
//!
//! [`EventLog`] is a [`Sink`] that remembers everything it is told as
//! [`Event`]s, which is the simplest way to inspect what a feed produced.
//!
//! ```
//! use jsonshift::{Event, EventLog, Parser};
//!
//! let mut parser = Parser::new(EventLog::default());
//! parser.feed_str("[true]");
//! assert_eq!(
//!     parser.sink().events(),
//!     &[
//!         Event::StartDocument,
//!         Event::StartArray { line: 1, column: 1, text: "[".into() },
//!         Event::Boolean { line: 1, column: 2, text: "true".into() },
//!         Event::EndArray { line: 1, column: 6, text: "]".into() },
//!         Event::EndDocument,
//!     ]
//! );
//! ```

use core::fmt;

use crate::Sink;

/// One sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
#[allow(missing_docs)]
pub enum Event {
    StartDocument,
    EndDocument,
    Space {
        line: usize,
        column: usize,
        text: String,
    },
    Null {
        line: usize,
        column: usize,
        text: String,
    },
    Boolean {
        line: usize,
        column: usize,
        text: String,
    },
    StartObject {
        line: usize,
        column: usize,
        text: String,
    },
    EndObject {
        line: usize,
        column: usize,
        text: String,
    },
    StartArray {
        line: usize,
        column: usize,
        text: String,
    },
    EndArray {
        line: usize,
        column: usize,
        text: String,
    },
    String {
        line: usize,
        column: usize,
        text: String,
    },
    Number {
        line: usize,
        column: usize,
        text: String,
    },
    NextElement {
        line: usize,
        column: usize,
        text: String,
    },
    MemberValue {
        line: usize,
        column: usize,
        text: String,
    },
    Error {
        line: usize,
        column: usize,
        message: String,
    },
}

impl Event {
    /// The sink method this event stands for.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::StartDocument => "startDocument",
            Event::EndDocument => "endDocument",
            Event::Space { .. } => "space",
            Event::Null { .. } => "null",
            Event::Boolean { .. } => "boolean",
            Event::StartObject { .. } => "startObject",
            Event::EndObject { .. } => "endObject",
            Event::StartArray { .. } => "startArray",
            Event::EndArray { .. } => "endArray",
            Event::String { .. } => "string",
            Event::Number { .. } => "number",
            Event::NextElement { .. } => "nextElement",
            Event::MemberValue { .. } => "memberValue",
            Event::Error { .. } => "error",
        }
    }

    /// `(line, column, text)` for everything but the document brackets.
    #[must_use]
    pub fn located(&self) -> Option<(usize, usize, &str)> {
        match self {
            Event::StartDocument | Event::EndDocument => None,
            Event::Space { line, column, text }
            | Event::Null { line, column, text }
            | Event::Boolean { line, column, text }
            | Event::StartObject { line, column, text }
            | Event::EndObject { line, column, text }
            | Event::StartArray { line, column, text }
            | Event::EndArray { line, column, text }
            | Event::String { line, column, text }
            | Event::Number { line, column, text }
            | Event::NextElement { line, column, text }
            | Event::MemberValue { line, column, text }
            | Event::Error {
                line,
                column,
                message: text,
            } => Some((*line, *column, text.as_str())),
        }
    }

    /// Returns `true` for [`Event::Error`].
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Event::Error { .. })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.located() {
            Some((line, column, text)) => write!(f, "({line},{column}) {}: {text}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// A sink that records every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Everything recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Takes the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// The recorded error events.
    pub fn errors(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_error())
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

macro_rules! record {
    ($($method:ident => $variant:ident),* $(,)?) => {
        $(
            fn $method(&mut self, line: usize, column: usize, text: &str) {
                self.events.push(Event::$variant {
                    line,
                    column,
                    text: text.to_string(),
                });
            }
        )*
    };
}

impl Sink for EventLog {
    fn start_document(&mut self) {
        self.events.push(Event::StartDocument);
    }

    fn end_document(&mut self) {
        self.events.push(Event::EndDocument);
    }

    record! {
        space => Space,
        null => Null,
        boolean => Boolean,
        start_object => StartObject,
        end_object => EndObject,
        start_array => StartArray,
        end_array => EndArray,
        string => String,
        number => Number,
        next_element => NextElement,
        member_value => MemberValue,
    }

    fn error(&mut self, line: usize, column: usize, message: &str) {
        self.events.push(Event::Error {
            line,
            column,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let event = Event::Number {
            line: 2,
            column: 9,
            text: "-0.1e-01".into(),
        };
        assert_eq!(event.to_string(), "(2,9) number: -0.1e-01");
        assert_eq!(Event::EndDocument.to_string(), "endDocument");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let event = Event::MemberValue {
            line: 1,
            column: 4,
            text: ":".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"MemberValue","line":1,"column":4,"text":":"}"#);
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn log_filters_errors() {
        let mut log = EventLog::default();
        log.start_document();
        log.error(1, 1, "bad");
        log.null(1, 1, "null");
        assert_eq!(log.errors().count(), 1);
        log.clear();
        assert!(log.events().is_empty());
    }
}
