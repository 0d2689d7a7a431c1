#![no_main]
use std::io::{self, Read};

use arbitrary::Arbitrary;
use jsonshift::{Event, EventLog, Parser, ParserOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    /// Bytes handed out per read call; zero is treated as one.
    step: u8,
    /// Requested read buffer size.
    read_chunk: u8,
    context_width: u8,
    text: &'a str,
    raw: &'a [u8],
}

/// Hands out at most `step` bytes per read.
struct Trickle<'a> {
    bytes: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}

fn check_document(events: &[Event], empty: bool) {
    if empty {
        assert_eq!(events.len(), 1, "{events:?}");
        assert!(events[0].is_error());
        return;
    }
    assert_eq!(events.first(), Some(&Event::StartDocument));
    assert_eq!(events.last(), Some(&Event::EndDocument));
    let inner = &events[1..events.len() - 1];
    assert!(
        !inner
            .iter()
            .any(|event| matches!(event, Event::StartDocument | Event::EndDocument)),
        "{events:?}"
    );
}

fuzz_target!(|input: Input<'_>| {
    let options = ParserOptions {
        read_chunk: usize::from(input.read_chunk),
        context_width: usize::from(input.context_width % 8),
    };
    let step = usize::from(input.step).max(1);

    let mut from_str = Parser::with_options(EventLog::default(), options);
    from_str.feed_str(input.text);
    let expected = from_str.into_sink().into_events();
    check_document(&expected, input.text.is_empty());

    let mut from_reader = Parser::with_options(EventLog::default(), options);
    let Ok(_) = from_reader.feed_reader(Trickle {
        bytes: input.text.as_bytes(),
        step,
    }) else {
        unreachable!("in-memory reads never fail");
    };
    assert_eq!(from_reader.sink().events(), expected.as_slice());

    let mut raw = Parser::with_options(EventLog::default(), options);
    let Ok(_) = raw.feed_reader(Trickle {
        bytes: input.raw,
        step,
    }) else {
        unreachable!("in-memory reads never fail");
    };
    check_document(raw.sink().events(), input.raw.is_empty());
});
