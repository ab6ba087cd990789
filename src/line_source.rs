//! Line-at-a-time input for the decoders.
//!
//! Anything that yields `io::Result<String>` items is a [`LineSource`].
//! [`byte_lines`] wraps a locked stdin, a serial port or a file, and
//! [`str_lines`] wraps in-memory text.

use crate::error::{Error, Result};
use std::io::{self, BufRead};

/// Stands in for a line that was not valid UTF-8. Never equal to a keyword
/// or delimiter, so such a line is discarded before the header and reported
/// as unrecognized inside a block.
pub const UNDECODABLE_LINE: &str = "\u{FFFD}";

/// An exhaustible, order-preserving producer of text lines.
pub trait LineSource {
    /// Read the next line without its terminator, or `None` at end of stream.
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<I> LineSource for I
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.next() {
            Some(line) => {
                let mut line = match line {
                    Ok(line) => line,
                    // `BufRead::lines` has already consumed the bad line.
                    Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                        UNDECODABLE_LINE.to_string()
                    }
                    Err(e) => return Err(e.into()),
                };
                // Serial senders terminate lines with CRLF.
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }
}

/// Iterate over the lines of an in-memory string as a [`LineSource`].
///
/// # Example
///
/// ```
/// use transmitter::line_source::{LineSource, str_lines};
///
/// let mut source = str_lines("wait\n5\n");
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("wait"));
/// ```
pub fn str_lines(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
    text.lines().map(|line| Ok(line.to_owned()))
}

/// Split a byte stream on `\n`, decoding each line lossily.
///
/// Boot noise on a serial link is often not UTF-8; it must still read as a
/// line so framing can discard it.
pub fn byte_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}

/// Reads the integer argument lines of a single command.
///
/// Every error it produces names the command being decoded, so a failure deep
/// in a long block can still be traced back to its keyword.
pub struct ArgumentReader<'a> {
    source: &'a mut dyn LineSource,
    command: &'static str,
}

impl<'a> ArgumentReader<'a> {
    pub fn new(source: &'a mut dyn LineSource, command: &'static str) -> Self {
        Self { source, command }
    }

    /// The keyword whose arguments are being read.
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Consume one line and parse it as a signed decimal integer.
    ///
    /// # Errors
    ///
    /// [`Error::TruncatedInput`] if the stream is exhausted,
    /// [`Error::MalformedArgument`] if the line is not an integer.
    pub fn next_int(&mut self, field: &'static str) -> Result<i64> {
        self.next_line_int(field).map(|(_, value)| value)
    }

    /// Like [`next_int`](Self::next_int), but also returns the line as
    /// received so later validation can name it.
    pub fn next_line_int(&mut self, field: &'static str) -> Result<(String, i64)> {
        let line = self.source.next_line()?.ok_or(Error::TruncatedInput {
            command: self.command,
            field,
        })?;
        match parse_int(&line) {
            Ok(value) => Ok((line, value)),
            Err(e) => Err(Error::MalformedArgument {
                command: self.command,
                field,
                line,
                reason: e.to_string(),
            }),
        }
    }
}

/// Parse a decimal integer with an optional sign, ignoring surrounding whitespace.
pub(crate) fn parse_int(line: &str) -> std::result::Result<i64, std::num::ParseIntError> {
    line.trim().parse()
}
