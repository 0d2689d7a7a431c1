use core::fmt;

use crate::Sink;

/// A sink that writes a transcript of the document to a [`fmt::Write`].
///
/// A verbose echo reproduces the input token by token between
/// `START DOCUMENT` and `END DOCUMENT` lines; a quiet one only writes errors.
/// Each error goes on its own line as `(line,column) message`.
///
/// ```
/// use jsonshift::{EchoSink, Parser};
///
/// let mut parser = Parser::new(EchoSink::verbose(String::new()));
/// parser.feed_str("[1, 2]");
/// let out = parser.into_sink().finish().unwrap();
/// assert_eq!(out, "START DOCUMENT\n[1, 2]\nEND DOCUMENT\n");
/// ```
#[derive(Debug)]
pub struct EchoSink<W> {
    out: W,
    verbose: bool,
    status: fmt::Result,
}

impl<W: fmt::Write> EchoSink<W> {
    /// Echoes every token and every error.
    pub fn verbose(out: W) -> Self {
        Self {
            out,
            verbose: true,
            status: Ok(()),
        }
    }

    /// Echoes errors only.
    pub fn quiet(out: W) -> Self {
        Self {
            out,
            verbose: false,
            status: Ok(()),
        }
    }

    /// Returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first write failure, if any write failed.
    pub fn finish(self) -> Result<W, fmt::Error> {
        self.status.map(|()| self.out)
    }

    fn write(&mut self, args: fmt::Arguments<'_>) {
        if self.status.is_ok() {
            self.status = self.out.write_fmt(args);
        }
    }

    fn echo(&mut self, text: &str) {
        if self.verbose {
            self.write(format_args!("{text}"));
        }
    }
}

macro_rules! echo_tokens {
    ($($method:ident),* $(,)?) => {
        $(
            fn $method(&mut self, _line: usize, _column: usize, text: &str) {
                self.echo(text);
            }
        )*
    };
}

impl<W: fmt::Write> Sink for EchoSink<W> {
    fn start_document(&mut self) {
        if self.verbose {
            self.write(format_args!("START DOCUMENT\n"));
        }
    }

    fn end_document(&mut self) {
        if self.verbose {
            self.write(format_args!("\nEND DOCUMENT\n"));
        }
    }

    echo_tokens! {
        space,
        null,
        boolean,
        start_object,
        end_object,
        start_array,
        end_array,
        string,
        number,
        next_element,
        member_value,
    }

    fn error(&mut self, line: usize, column: usize, message: &str) {
        self.write(format_args!("\n({line},{column}) {message}"));
    }
}
