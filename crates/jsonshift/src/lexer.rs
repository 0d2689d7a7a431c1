//! The lexical state machine.
//!
//! [`Lexer::next_token`] runs the machine from its start state until exactly
//! one token has been recognized. Characters are consumed only when they
//! belong to the token; the character that ends a token stays in the source
//! and starts the next one. End of input behaves like a character that no
//! predicate accepts, so a token cut short in a required position becomes a
//! lexical error and a completely drained source yields an [`Tag::End`]
//! token with empty text.

use crate::{CharSource, Tag, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Start,
    Space,
    Minus,
    Zero,
    Integer,
    Fraction,
    FractionDigits,
    Exponent,
    ExponentSign,
    ExponentDigits,
    String,
    Escape,
    /// Inside `\uXXXX`, with this many hex digits still expected.
    Hex(u8),
    Literal,
}

/// What to do with the peeked character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Consume it and continue in the given state.
    Next(LexState),
    /// Consume it and finish the token.
    Done,
    /// Leave it in the source and finish the token.
    Stop,
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

/// Characters that end a bare-word literal run.
fn ends_literal(c: char) -> bool {
    is_space(c)
        || c.is_ascii_digit()
        || matches!(c, '[' | ']' | '{' | '}' | ',' | ':' | '.' | '"' | '+' | '-')
}

/// Turns a character source into positioned tokens.
#[derive(Debug)]
pub struct Lexer<S> {
    source: S,
    line: usize,
    column: usize,
}

impl<S: CharSource> Lexer<S> {
    /// Starts lexing `source` at line 1, column 1.
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
        }
    }

    /// The position the next token will start at.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Recognizes the next token.
    ///
    /// # Errors
    ///
    /// Propagates failures of the character source. Malformed input is not an
    /// error here; it comes back as a [`Tag::Error`] token.
    pub fn next_token(&mut self) -> Result<Token, S::Error> {
        let mut token = Token::new(Tag::End, String::new(), self.line, self.column);
        let mut state = LexState::Start;

        loop {
            let c = self.source.peek()?;
            let step = Self::step(state, c, &mut token);
            match (step, c) {
                (Step::Next(next), Some(c)) => {
                    self.advance(c, &mut token);
                    state = next;
                }
                (Step::Done, Some(c)) => {
                    self.advance(c, &mut token);
                    break;
                }
                _ => break,
            }
        }

        Ok(token)
    }

    fn advance(&mut self, c: char, token: &mut Token) {
        self.source.bump();
        token.text.push(c);
        self.column += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        }
    }

    fn step(state: LexState, c: Option<char>, token: &mut Token) -> Step {
        use LexState as S;

        match state {
            S::Start => {
                let Some(c) = c else {
                    return Step::Stop;
                };
                let (tag, step) = match c {
                    c if is_space(c) => (Tag::Space, Step::Next(S::Space)),
                    '[' => (Tag::OpenBracket, Step::Done),
                    ']' => (Tag::CloseBracket, Step::Done),
                    '{' => (Tag::OpenBrace, Step::Done),
                    '}' => (Tag::CloseBrace, Step::Done),
                    ',' => (Tag::Comma, Step::Done),
                    ':' => (Tag::Colon, Step::Done),
                    '-' => (Tag::Number, Step::Next(S::Minus)),
                    '0' => (Tag::Number, Step::Next(S::Zero)),
                    '1'..='9' => (Tag::Number, Step::Next(S::Integer)),
                    '"' => (Tag::String, Step::Next(S::String)),
                    _ => (Tag::Error, Step::Next(S::Literal)),
                };
                token.tag = tag;
                step
            }
            S::Space => match c {
                Some(c) if is_space(c) => Step::Next(S::Space),
                _ => Step::Stop,
            },
            S::Minus => match c {
                Some('0') => Step::Next(S::Zero),
                Some('1'..='9') => Step::Next(S::Integer),
                _ => Self::fail(token),
            },
            S::Zero | S::Integer => match c {
                Some('.') => Step::Next(S::Fraction),
                Some('e' | 'E') => Step::Next(S::Exponent),
                _ if state == S::Integer && is_digit(c) => Step::Next(S::Integer),
                _ => Step::Stop,
            },
            S::Fraction => {
                if is_digit(c) {
                    Step::Next(S::FractionDigits)
                } else {
                    Self::fail(token)
                }
            }
            S::FractionDigits => match c {
                Some('e' | 'E') => Step::Next(S::Exponent),
                _ if is_digit(c) => Step::Next(S::FractionDigits),
                _ => Step::Stop,
            },
            S::Exponent => match c {
                Some('+' | '-') => Step::Next(S::ExponentSign),
                _ if is_digit(c) => Step::Next(S::ExponentDigits),
                _ => Self::fail(token),
            },
            S::ExponentSign => {
                if is_digit(c) {
                    Step::Next(S::ExponentDigits)
                } else {
                    Self::fail(token)
                }
            }
            S::ExponentDigits => {
                if is_digit(c) {
                    Step::Next(S::ExponentDigits)
                } else {
                    Step::Stop
                }
            }
            S::String => match c {
                Some('"') => Step::Done,
                Some('\\') => Step::Next(S::Escape),
                Some(c) if c >= '\u{20}' => Step::Next(S::String),
                // A raw control character, or the input ended first.
                _ => Self::fail(token),
            },
            S::Escape => match c {
                Some('"' | '\\' | '/' | 'b' | 'n' | 'r' | 't') => Step::Next(S::String),
                Some('u') => Step::Next(S::Hex(4)),
                _ => Self::fail(token),
            },
            S::Hex(remaining) => match c {
                Some(c) if c.is_ascii_hexdigit() => {
                    if remaining > 1 {
                        Step::Next(S::Hex(remaining - 1))
                    } else {
                        Step::Next(S::String)
                    }
                }
                _ => Self::fail(token),
            },
            S::Literal => match c {
                Some(c) if !ends_literal(c) => Step::Next(S::Literal),
                _ => {
                    token.tag = match token.text.as_str() {
                        "true" => Tag::True,
                        "false" => Tag::False,
                        "null" => Tag::Null,
                        _ => Tag::Error,
                    };
                    Step::Stop
                }
            },
        }
    }

    fn fail(token: &mut Token) -> Step {
        token.tag = Tag::Error;
        Step::Stop
    }
}
