//! The event sink contract.
//!
//! A [`Sink`] receives one call per occurrence, synchronously and in lexical
//! order. Every method has a no-op default so a host implements only what it
//! cares about. Positions are 1-based; texts are raw source, so strings keep
//! their quotes and escapes and numbers are not converted.

use crate::{Token, grammar::LexicalEvent};

/// Receives parser notifications.
#[allow(unused_variables)]
pub trait Sink {
    /// A feed call started a document.
    fn start_document(&mut self) {}

    /// The document started by the matching [`start_document`] is done.
    ///
    /// [`start_document`]: Sink::start_document
    fn end_document(&mut self) {}

    /// A whitespace run.
    fn space(&mut self, line: usize, column: usize, text: &str) {}

    /// A `null` literal.
    fn null(&mut self, line: usize, column: usize, text: &str) {}

    /// A `true` or `false` literal.
    fn boolean(&mut self, line: usize, column: usize, text: &str) {}

    /// `{`
    fn start_object(&mut self, line: usize, column: usize, text: &str) {}

    /// `}`
    fn end_object(&mut self, line: usize, column: usize, text: &str) {}

    /// `[`
    fn start_array(&mut self, line: usize, column: usize, text: &str) {}

    /// `]`
    fn end_array(&mut self, line: usize, column: usize, text: &str) {}

    /// A string literal, quotes included.
    fn string(&mut self, line: usize, column: usize, text: &str) {}

    /// A number literal.
    fn number(&mut self, line: usize, column: usize, text: &str) {}

    /// `,`
    fn next_element(&mut self, line: usize, column: usize, text: &str) {}

    /// `:`
    fn member_value(&mut self, line: usize, column: usize, text: &str) {}

    /// A lexical, structural or input error.
    fn error(&mut self, line: usize, column: usize, message: &str) {}
}

impl Sink for () {}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn start_document(&mut self) {
        (**self).start_document();
    }

    fn end_document(&mut self) {
        (**self).end_document();
    }

    fn space(&mut self, line: usize, column: usize, text: &str) {
        (**self).space(line, column, text);
    }

    fn null(&mut self, line: usize, column: usize, text: &str) {
        (**self).null(line, column, text);
    }

    fn boolean(&mut self, line: usize, column: usize, text: &str) {
        (**self).boolean(line, column, text);
    }

    fn start_object(&mut self, line: usize, column: usize, text: &str) {
        (**self).start_object(line, column, text);
    }

    fn end_object(&mut self, line: usize, column: usize, text: &str) {
        (**self).end_object(line, column, text);
    }

    fn start_array(&mut self, line: usize, column: usize, text: &str) {
        (**self).start_array(line, column, text);
    }

    fn end_array(&mut self, line: usize, column: usize, text: &str) {
        (**self).end_array(line, column, text);
    }

    fn string(&mut self, line: usize, column: usize, text: &str) {
        (**self).string(line, column, text);
    }

    fn number(&mut self, line: usize, column: usize, text: &str) {
        (**self).number(line, column, text);
    }

    fn next_element(&mut self, line: usize, column: usize, text: &str) {
        (**self).next_element(line, column, text);
    }

    fn member_value(&mut self, line: usize, column: usize, text: &str) {
        (**self).member_value(line, column, text);
    }

    fn error(&mut self, line: usize, column: usize, message: &str) {
        (**self).error(line, column, message);
    }
}

/// Routes a lexed terminal to the sink method registered for it.
pub(crate) fn dispatch<S: Sink + ?Sized>(sink: &mut S, event: LexicalEvent, token: &Token) {
    let Token {
        line, column, text, ..
    } = token;
    let (line, column) = (*line, *column);
    match event {
        LexicalEvent::Space => sink.space(line, column, text),
        LexicalEvent::Null => sink.null(line, column, text),
        LexicalEvent::Boolean => sink.boolean(line, column, text),
        LexicalEvent::StartObject => sink.start_object(line, column, text),
        LexicalEvent::EndObject => sink.end_object(line, column, text),
        LexicalEvent::StartArray => sink.start_array(line, column, text),
        LexicalEvent::EndArray => sink.end_array(line, column, text),
        LexicalEvent::String => sink.string(line, column, text),
        LexicalEvent::Number => sink.number(line, column, text),
        LexicalEvent::NextElement => sink.next_element(line, column, text),
        LexicalEvent::MemberValue => sink.member_value(line, column, text),
    }
}
