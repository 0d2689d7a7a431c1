#![allow(missing_docs, dead_code)]

use std::io::{self, Read};

pub const SAMPLE: &str = r#"{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "matrix": [[1, 2.5e3], [-0, -1E-2]],
    "flags": [true, false],
    "unicode": "café ☕"
}"#;

/// A reader that hands out at most `step` bytes per call.
pub struct Trickle<'a> {
    bytes: &'a [u8],
    step: usize,
}

impl<'a> Trickle<'a> {
    pub fn new(bytes: &'a [u8], step: usize) -> Self {
        Self { bytes, step }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}

/// A reader that yields `good` and then fails.
pub struct Failing<'a> {
    good: &'a [u8],
}

impl<'a> Failing<'a> {
    pub fn new(good: &'a [u8]) -> Self {
        Self { good }
    }
}

impl Read for Failing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.good.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"));
        }
        let n = buf.len().min(self.good.len());
        buf[..n].copy_from_slice(&self.good[..n]);
        self.good = &self.good[n..];
        Ok(n)
    }
}
