//! Echoes a handful of documents back through a verbose [`EchoSink`].
//!
//! Every token is written out as soon as the lexer produces it, so the output
//! reproduces each input between `START DOCUMENT` and `END DOCUMENT` lines,
//! with any problem reported inline as `(line,column) message`. The last two
//! samples are deliberately malformed.
//!
//! Files named on the command line are streamed through
//! [`Parser::feed_reader`] instead of the built-in samples.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonshift --example sample
//! cargo run -p jsonshift --example sample -- some.json other.json
//! ```

use std::{error::Error, fs::File};

use jsonshift::{EchoSink, Parser};

const SAMPLES: &[&str] = &[
    r#"{
  "id": -0.1e-01,
  "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
  "name": "Hello-World",
  "owner": {
    "login": "octocat",
    "site_admin": false
  },
  "topics": ["octocat", "atom", "electron", "api"],
  "forks_count": 9,
  "private": false,
  "permissions": { "admin": false, "push": false, "pull": true },
  "license": null
}"#,
    "null",
    "false",
    r#""\r\\\n ""#,
    "{}",
    "[1, 2,]",
    "-0123.456e01",
];

fn main() -> Result<(), Box<dyn Error>> {
    let mut parser = Parser::new(EchoSink::verbose(String::new()));

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        for sample in SAMPLES {
            parser.feed_str(sample);
        }
    } else {
        for path in &paths {
            parser.feed_reader(File::open(path)?)?;
        }
    }

    print!("{}", parser.into_sink().finish()?);
    Ok(())
}
