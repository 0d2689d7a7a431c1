//! A callback-driven streaming JSON parser.
//!
//! Text goes in through [`Parser::feed_str`] or [`Parser::feed_reader`];
//! every recognized token and every problem comes out through a [`Sink`],
//! tagged with its line and column. No value tree is built.
//!
//! Underneath sit two pieces: a lexical state machine ([`Lexer`]) that turns
//! characters into [`Token`]s, and a table-free shift/reduce engine
//! ([`Reducer`]) that collapses the token stack with the fixed
//! [`grammar`] until a single document symbol is left.
//!
//! ```
//! use jsonshift::{EchoSink, Parser};
//!
//! let mut parser = Parser::new(EchoSink::quiet(String::new()));
//! parser.feed_str(r#"{"id": -0.1e-01}"#).feed_str("[1, 2,]");
//! let errors = parser.into_sink().finish().unwrap();
//! assert!(errors.contains("JSON parse error"));
//! ```

mod echo;
mod error;
mod event;
pub mod grammar;
mod lexer;
mod options;
mod parser;
mod reducer;
mod sink;
mod source;
mod tag;
mod token;

#[cfg(test)]
mod tests;

pub use echo::EchoSink;
pub use error::{Diagnostic, FeedError};
pub use event::{Event, EventLog};
pub use lexer::Lexer;
pub use options::ParserOptions;
pub use parser::Parser;
pub use reducer::Reducer;
pub use sink::Sink;
pub use source::{CharSource, ReadSource, StrSource};
pub use tag::Tag;
pub use token::Token;
