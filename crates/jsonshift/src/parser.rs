//! The feed driver.
//!
//! One feed call parses one document: it pulls tokens from the lexer, tells
//! the sink about each terminal as soon as it is lexed, shifts the token onto
//! the reducer and reduces, then checks at end of input that exactly one
//! document symbol is left. Lexical events fire before anything is known
//! about the surrounding structure, so a sink can see `startObject` for an
//! object that later turns out malformed.
//!
//! ```
//! use jsonshift::{EventLog, Parser};
//!
//! let mut parser = Parser::new(EventLog::default());
//! parser.feed_str("null").feed_str("[1, 2]");
//! assert!(parser.is_accepted());
//! assert_eq!(parser.sink().errors().count(), 0);
//! ```

use std::io::Read;

use tracing::debug;

use crate::{
    CharSource, Diagnostic, FeedError, Lexer, ParserOptions, ReadSource, Reducer, Sink,
    StrSource, Tag, Token, grammar::lexical_event, sink::dispatch,
};

/// A streaming JSON parser reporting to a [`Sink`].
///
/// A parser can be fed any number of documents in turn; the stack and the
/// diagnostic cursor are reset at the start of each feed. Instances share
/// nothing but the static grammar, so independent streams want independent
/// parsers.
#[derive(Debug)]
pub struct Parser<S> {
    sink: S,
    reducer: Reducer,
    options: ParserOptions,
}

impl<S: Default> Default for Parser<S> {
    fn default() -> Self {
        Self::with_options(S::default(), ParserOptions::default())
    }
}

impl<S> Parser<S> {
    /// Creates a parser with default options.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, ParserOptions::default())
    }

    /// Creates a parser.
    pub fn with_options(sink: S, options: ParserOptions) -> Self {
        Self {
            sink,
            reducer: Reducer::new(),
            options,
        }
    }

    /// The options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the parser and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The parse stack as the last feed left it, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[Token] {
        self.reducer.stack()
    }

    /// `true` when the last feed reduced to exactly one document symbol.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.reducer.is_accepted()
    }
}

impl<S: Sink> Parser<S> {
    /// Parses `text` as one document.
    pub fn feed_str(&mut self, text: &str) -> &mut Self {
        match self.feed(StrSource::new(text)) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self
    }

    /// Parses everything `reader` yields as one document.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Io`] when the reader fails after the document
    /// started. The sink has then seen a started document that never ends.
    /// A reader that fails on its first read is reported like empty input.
    pub fn feed_reader<R: Read>(&mut self, reader: R) -> Result<&mut Self, FeedError> {
        let chunk = self.options.read_chunk;
        self.feed(ReadSource::new(reader, chunk))?;
        Ok(self)
    }

    /// Parses everything `source` yields as one document.
    ///
    /// A source with no characters at all, or one that fails before the
    /// first character, gets a single [`Diagnostic::EmptyDocument`] report
    /// and no document events.
    ///
    /// # Errors
    ///
    /// Propagates failures of the source once the document has started.
    pub fn feed<C: CharSource>(&mut self, mut source: C) -> Result<(), C::Error> {
        self.reducer.clear();
        if !matches!(source.peek(), Ok(Some(_))) {
            self.report(&Diagnostic::EmptyDocument);
            return Ok(());
        }

        let mut lexer = Lexer::new(source);
        debug!("start document");
        self.sink.start_document();

        loop {
            let token = lexer.next_token()?;
            if let Some(event) = lexical_event(token.tag) {
                dispatch(&mut self.sink, event, &token);
            }

            let tag = token.tag;
            let at_end = tag == Tag::End;
            match tag {
                Tag::Space => continue,
                Tag::Error => self.report(&Diagnostic::Syntax(token)),
                _ => self.reducer.push(token),
            }

            if !self.reducer.reduce_to_fixed_point() || (at_end && !self.reducer.is_accepted()) {
                self.parse_error();
            }
            if at_end {
                break;
            }
        }

        let (line, column) = lexer.position();
        debug!(line, column, accepted = self.reducer.is_accepted(), "end document");
        self.sink.end_document();
        Ok(())
    }

    fn parse_error(&mut self) {
        let context = self.reducer.context(self.options.context_width);
        if context.is_empty() {
            return;
        }
        let diagnostic = Diagnostic::Parse(context.to_vec());
        self.report(&diagnostic);
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        let (line, column) = diagnostic.position();
        let message = diagnostic.to_string();
        debug!(line, column, %message, "diagnostic");
        self.sink.error(line, column, &message);
    }
}
