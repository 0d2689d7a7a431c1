//! Character sources for the lexer.
//!
//! The lexer needs one character of lookahead and nothing else. A source
//! either borrows an in-memory string, which cannot fail, or decodes UTF-8
//! from an [`io::Read`] as the lexer asks for characters.

use core::{convert::Infallible, iter::Peekable, str::Chars};
use std::io::{self, Read};

/// A peekable stream of characters.
pub trait CharSource {
    /// The failure raised when the underlying input becomes unusable.
    type Error;

    /// Returns the next character without consuming it, `None` at the end.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying input.
    fn peek(&mut self) -> Result<Option<char>, Self::Error>;

    /// Consumes the character last returned by [`peek`](Self::peek).
    fn bump(&mut self);
}

/// A source over an in-memory string.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> StrSource<'a> {
    /// Wraps `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }
}

impl CharSource for StrSource<'_> {
    type Error = Infallible;

    fn peek(&mut self) -> Result<Option<char>, Infallible> {
        Ok(self.chars.peek().copied())
    }

    fn bump(&mut self) {
        self.chars.next();
    }
}

/// A source decoding UTF-8 from a reader.
///
/// Invalid byte sequences decode to U+FFFD, which the lexer rejects like any
/// other stray character.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
    chunk: usize,
    eof: bool,
    peeked: Option<(char, usize)>,
}

impl<R: Read> ReadSource<R> {
    /// Wraps `reader`, requesting `chunk` bytes per read.
    #[must_use]
    pub fn new(reader: R, chunk: usize) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: 0,
            // A whole UTF-8 sequence must fit in the window.
            chunk: chunk.max(4),
            eof: false,
            peeked: None,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
        let start = self.buf.len();
        self.buf.resize(start + self.chunk, 0);
        let read = loop {
            match self.reader.read(&mut self.buf[start..]) {
                Ok(n) => break n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    self.buf.truncate(start);
                    return Err(err);
                }
            }
        };
        self.buf.truncate(start + read);
        if read == 0 {
            self.eof = true;
        }
        Ok(())
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    type Error = io::Error;

    fn peek(&mut self) -> io::Result<Option<char>> {
        if let Some((ch, _)) = self.peeked {
            return Ok(Some(ch));
        }
        while !self.eof && self.buf.len() - self.pos < 4 {
            self.fill()?;
        }
        if self.pos >= self.buf.len() {
            return Ok(None);
        }
        let (ch, size) = bstr::decode_utf8(&self.buf[self.pos..]);
        let ch = ch.unwrap_or(char::REPLACEMENT_CHARACTER);
        self.peeked = Some((ch, size));
        Ok(Some(ch))
    }

    fn bump(&mut self) {
        if let Some((_, size)) = self.peeked.take() {
            self.pos += size;
        }
    }
}
