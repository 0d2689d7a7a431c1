use crate::{Event, EventLog, Parser};

pub(crate) fn parse(text: &str) -> Parser<EventLog> {
    let mut parser = Parser::new(EventLog::default());
    parser.feed_str(text);
    parser
}

pub(crate) fn events(text: &str) -> Vec<Event> {
    parse(text).into_sink().into_events()
}

/// One line per event, whitespace runs left out.
pub(crate) fn transcript(events: &[Event]) -> String {
    events
        .iter()
        .filter(|event| !matches!(event, Event::Space { .. }))
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn error_messages(events: &[Event]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Error { message, .. } => Some(message.as_str()),
            _ => None,
        })
        .collect()
}

/// `{`, `}`, `[` and `]` in the order their events fired.
pub(crate) fn nesting(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|event| match event {
            Event::StartObject { .. } => Some('{'),
            Event::EndObject { .. } => Some('}'),
            Event::StartArray { .. } => Some('['),
            Event::EndArray { .. } => Some(']'),
            _ => None,
        })
        .collect()
}
