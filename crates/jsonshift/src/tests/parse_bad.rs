use rstest::rstest;

use super::utils::{error_messages, events, nesting, parse};
use crate::Event;

#[test]
fn empty_input_is_an_input_error() {
    assert_eq!(
        events(""),
        vec![Event::Error {
            line: 0,
            column: 0,
            message: "empty or illegal JSON document".into()
        }]
    );
}

#[test]
fn bare_word_is_rejected_without_structure() {
    let log = events("A0123");
    let messages = error_messages(&log);
    let lexical: Vec<_> = messages
        .iter()
        .filter(|message| message.starts_with("JSON syntax error"))
        .collect();
    assert_eq!(lexical, vec![&"JSON syntax error at 'A'"]);
    assert_eq!(nesting(&log), "");
    assert_eq!(
        messages.last(),
        Some(&"JSON parse error at '0' =:: values '123' =:: JSON")
    );
}

#[test]
fn unsupported_escape() {
    let log = events(r#""\x""#);
    assert!(!log.iter().any(|event| matches!(event, Event::String { .. })));
    assert_eq!(
        log.iter().find(|event| event.is_error()),
        Some(&Event::Error {
            line: 1,
            column: 1,
            message: r#"JSON syntax error at '"\'"#.into()
        })
    );
}

#[test]
fn stray_closer_is_reported_twice() {
    assert_eq!(
        error_messages(&events("]")),
        vec!["JSON parse error at ']' =:: ]", "JSON parse error at '' =:: EOF"]
    );
}

#[rstest]
#[case("0123A", &[
    "JSON syntax error at 'A'",
    "JSON parse error at '0' =:: values '123' =:: JSON",
])]
#[case("+123.456e01", &["JSON syntax error at '+'"])]
#[case("-0123.456e01", &["JSON parse error at '-0' =:: values '123.456e01' =:: JSON"])]
#[case(r#""\u00XX"#, &[
    r#"JSON syntax error at '"\u00'"#,
    "JSON syntax error at 'XX'",
    "JSON parse error at '' =:: EOF",
])]
#[case("   ", &["JSON parse error at '' =:: EOF"])]
fn diagnostics(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(error_messages(&events(text)), expected);
}

#[rstest]
#[case("[1,]")]
#[case("[1 2]")]
#[case("{\"a\" 1}")]
#[case("{\"a\": }")]
#[case("{1: 2}")]
#[case("[")]
#[case("{")]
#[case("[}")]
#[case("\"open")]
#[case("nul")]
#[case("{\"a\": 1,}")]
fn malformed_documents_are_not_accepted(#[case] text: &str) {
    let parser = parse(text);
    assert!(!parser.is_accepted(), "{text:?}");
    assert!(parser.sink().errors().next().is_some(), "{text:?}");
    let events = parser.sink().events();
    assert_eq!(events.first(), Some(&Event::StartDocument));
    assert_eq!(events.last(), Some(&Event::EndDocument));
}
