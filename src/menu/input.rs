//! Whitespace-token integer reader over any `BufRead`.
//!
//! A line may carry several tokens (`1 4` answers the main prompt and the
//! choice prompt in one go). When a token fails to parse, the remainder of
//! its line is discarded so stale tokens never leak into the next prompt.

use std::io::BufRead;

use crate::core::errors::{MenuError, Result};

/// Reads one integer token at a time, pulling new lines on demand.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Read the next whitespace-delimited token as an `i32`.
    ///
    /// Blank lines are skipped. Returns `MalformedInput` (after discarding the
    /// rest of the line) when the token is not a whole integer, and
    /// `EndOfInput` once the stream is exhausted. A line that is not valid
    /// UTF-8 is discarded whole and reported as `MalformedInput`.
    ///
    /// Digits followed by letters (`12abc`) are one malformed token; the
    /// digits are not split off and consumed.
    pub fn next_int(&mut self) -> Result<i32> {
        let token = self.next_token()?;
        match token.parse::<i32>() {
            Ok(value) => Ok(value),
            Err(_) => {
                self.discard_line();
                Err(MenuError::MalformedInput { token })
            }
        }
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.cursor = self.line.len();
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            let rest = &self.line[self.cursor..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.cursor + (rest.len() - trimmed.len());
                let len = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                self.cursor = start + len;
                return Ok(self.line[start..start + len].to_string());
            }

            self.line.clear();
            self.cursor = 0;
            let mut buf = Vec::new();
            if self.inner.read_until(b'\n', &mut buf)? == 0 {
                return Err(MenuError::EndOfInput);
            }
            match String::from_utf8(buf) {
                Ok(line) => self.line = line,
                Err(e) => {
                    let token = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                    return Err(MenuError::MalformedInput { token });
                }
            }
        }
    }
}
