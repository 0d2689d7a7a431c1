#![allow(missing_docs)]

mod common;

use common::{Failing, SAMPLE, Trickle};
use jsonshift::{Event, EventLog, FeedError, Parser, ParserOptions};
use rstest::rstest;

fn from_str(text: &str) -> Vec<Event> {
    let mut parser = Parser::new(EventLog::default());
    parser.feed_str(text);
    parser.into_sink().into_events()
}

#[rstest]
#[case(1, 4)]
#[case(3, 4)]
#[case(5, 16)]
#[case(64, 8 * 1024)]
fn reader_matches_string(#[case] step: usize, #[case] read_chunk: usize) {
    let options = ParserOptions {
        read_chunk,
        ..Default::default()
    };
    let mut parser = Parser::with_options(EventLog::default(), options);
    parser
        .feed_reader(Trickle::new(SAMPLE.as_bytes(), step))
        .unwrap();
    assert!(parser.is_accepted());
    assert_eq!(parser.into_sink().into_events(), from_str(SAMPLE));
}

#[test]
fn reader_documents_chain() {
    let mut parser = Parser::new(EventLog::default());
    parser
        .feed_reader(&b"[1]"[..])
        .unwrap()
        .feed_reader(&b"{\"a\": null}"[..])
        .unwrap();
    let events = parser.into_sink().into_events();
    let brackets = events
        .iter()
        .filter(|event| matches!(event, Event::StartDocument | Event::EndDocument))
        .count();
    assert_eq!(brackets, 4);
    assert!(!events.iter().any(Event::is_error));
}

#[test]
fn empty_reader_is_an_input_error() {
    let mut parser = Parser::new(EventLog::default());
    parser.feed_reader(std::io::empty()).unwrap();
    assert_eq!(
        parser.sink().events(),
        &[Event::Error {
            line: 0,
            column: 0,
            message: "empty or illegal JSON document".into()
        }]
    );
}

#[test]
fn failing_reader_is_fatal() {
    let mut parser = Parser::new(EventLog::default());
    let err = parser.feed_reader(Failing::new(b"[1, 2")).unwrap_err();
    let FeedError::Io(io) = &err;
    assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    assert_eq!(err.to_string(), "failed to read JSON document: stream closed");

    let events = parser.sink().events();
    assert_eq!(events.first(), Some(&Event::StartDocument));
    assert_ne!(events.last(), Some(&Event::EndDocument));
}

#[test]
fn reader_failing_before_any_character_is_an_input_error() {
    let mut parser = Parser::new(EventLog::default());
    assert!(parser.feed_reader(Failing::new(b"")).is_ok());
    assert_eq!(
        parser.sink().events(),
        &[Event::Error {
            line: 0,
            column: 0,
            message: "empty or illegal JSON document".into()
        }]
    );

    parser.sink_mut().clear();
    parser.feed_reader(&b"[]"[..]).unwrap();
    assert!(parser.is_accepted());
    assert_eq!(parser.sink().errors().count(), 0);
}

#[test]
fn invalid_utf8_is_a_lexical_error() {
    let mut parser = Parser::new(EventLog::default());
    parser.feed_reader(&b"[\xff]"[..]).unwrap();
    let errors: Vec<&Event> = parser.sink().errors().collect();
    assert_eq!(
        errors.first(),
        Some(&&Event::Error {
            line: 1,
            column: 2,
            message: "JSON syntax error at '\u{FFFD}'".into()
        })
    );
}
