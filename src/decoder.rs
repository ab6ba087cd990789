//! Decoding of the transmitter's line protocol.
//!
//! A transmission looks like:
//!
//! ```text
//! <any lines, discarded>
//! start_delimiter
//! <decoder id>
//! <command block>
//! end_delimiter        (or end of stream)
//! ```
//!
//! [`read_header`] handles the framing, [`find_decoder`] maps the id to a
//! [`Decoder`], and [`Decoder::decode`] turns the command block into a
//! [`CommandSequence`]. [`decode_stream`] runs all three.

use crate::command::{Command, TransmitterCommand};
use crate::commands::{Emit, SetFanRpm, Wait};
use crate::error::{Error, Result};
use crate::line_source::{ArgumentReader, LineSource, byte_lines, parse_int, str_lines};
use crate::sequence::CommandSequence;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

/// Sentinel line that opens the header.
pub const START_DELIMITER: &str = "start_delimiter";

/// Sentinel line that closes a command block.
pub const END_DELIMITER: &str = "end_delimiter";

/// Identifier of the word decoder on the wire.
pub const WORD_DECODER_ID: i64 = 0;

/// Decoder implementations known to this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoder {
    /// One keyword per line, each followed by its integer argument lines.
    Word,
}

impl Decoder {
    pub const ALL: &'static [Decoder] = &[Decoder::Word];

    /// The identifier a header line uses to select this decoder.
    pub fn id(self) -> i64 {
        match self {
            Decoder::Word => WORD_DECODER_ID,
        }
    }

    /// Read one command block from `source`.
    ///
    /// Stops after the end delimiter or at end of stream, whichever comes
    /// first; lines after the delimiter are left unread.
    pub fn decode(self, source: &mut dyn LineSource) -> Result<CommandSequence> {
        match self {
            Decoder::Word => decode_words(source),
        }
    }
}

/// Look up a decoder by its header identifier.
pub fn find_decoder(id: i64) -> Option<Decoder> {
    Decoder::ALL.iter().copied().find(|decoder| decoder.id() == id)
}

type DecodeFn = fn(&mut ArgumentReader<'_>) -> Result<Command>;

static KEYWORDS: &[(&str, DecodeFn)] = &[
    (Emit::NAME, Emit::decode_command),
    (Wait::NAME, Wait::decode_command),
    (SetFanRpm::NAME, SetFanRpm::decode_command),
];

/// Word decoder state machine.
///
/// Unknown keyword lines are reported and skipped without consuming any
/// argument lines; every other failure ends the block.
fn decode_words(source: &mut dyn LineSource) -> Result<CommandSequence> {
    info!("decoding");
    let mut seq = CommandSequence::new();

    while let Some(line) = source.next_line()? {
        if line == END_DELIMITER {
            break;
        }
        match KEYWORDS.iter().find(|(keyword, _)| *keyword == line) {
            Some(&(keyword, decode)) => {
                let command = decode(&mut ArgumentReader::new(&mut *source, keyword))?;
                debug!(?command, "decoded command");
                seq.push(command);
            }
            None => {
                warn!(line = %line, "unknown command");
                seq.record_unrecognized(line);
            }
        }
    }

    info!(commands = seq.len(), "decoded");
    Ok(seq)
}

/// Skip to the start delimiter and read the decoder identifier after it.
///
/// # Errors
///
/// [`Error::NoStartDelimiter`] if the stream ends first;
/// [`Error::MalformedHeader`] if the identifier line is missing or not an integer.
pub fn read_header(source: &mut dyn LineSource) -> Result<i64> {
    loop {
        match source.next_line()? {
            Some(line) if line == START_DELIMITER => break,
            Some(line) => debug!(line = %line, "discarding line before start delimiter"),
            None => return Err(Error::NoStartDelimiter),
        }
    }

    let line = source.next_line()?.unwrap_or_default();
    parse_int(&line).map_err(|_| Error::MalformedHeader { line })
}

/// Frame, select a decoder and decode one command block.
///
/// # Example
///
/// ```
/// use transmitter::decoder::decode_stream;
/// use transmitter::line_source::str_lines;
///
/// let seq = decode_stream(&mut str_lines("noise\nstart_delimiter\n0\nwait\n5\n")).unwrap();
/// assert_eq!(seq.len(), 1);
/// ```
pub fn decode_stream(source: &mut dyn LineSource) -> Result<CommandSequence> {
    let id = read_header(source)?;
    let decoder = find_decoder(id).ok_or(Error::UnknownDecoder { id })?;
    debug!(?decoder, id, "selected decoder");
    decoder.decode(source)
}

/// [`decode_stream`] over an in-memory transmission.
pub fn decode_str(text: &str) -> Result<CommandSequence> {
    decode_stream(&mut str_lines(text))
}

/// [`decode_stream`] over a file.
pub fn decode_file(path: impl AsRef<Path>) -> Result<CommandSequence> {
    let file = File::open(path.as_ref())?;
    decode_stream(&mut byte_lines(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Spray;

    fn block(text: &str) -> Result<CommandSequence> {
        Decoder::Word.decode(&mut str_lines(text))
    }

    fn expected(build: impl FnOnce(&mut CommandSequence)) -> Vec<Command> {
        let mut seq = CommandSequence::new();
        build(&mut seq);
        seq.into_iter().collect()
    }

    #[test]
    fn test_find_decoder() {
        assert_eq!(find_decoder(0), Some(Decoder::Word));
        assert_eq!(find_decoder(99), None);
        assert_eq!(find_decoder(-1), None);
    }

    #[test]
    fn test_single_wait() {
        let seq = block("wait\n5\n").unwrap();
        assert_eq!(seq.commands(), expected(|s| {
            s.wait(5);
        }));
    }

    #[test]
    fn test_all_keywords_in_order() {
        let seq = block("fan\n1500\nemit\n0\n500\nwait\n1000\nemit\n1\n250\nend_delimiter\n").unwrap();
        assert_eq!(seq.commands(), expected(|s| {
            s.set_fan_rpm(1500)
                .emit(Spray::Spray1, 500)
                .wait(1000)
                .emit(Spray::Spray2, 250);
        }));
    }

    #[test]
    fn test_unknown_keyword_consumes_nothing() {
        let seq = block("foo\nwait\n3\n").unwrap();
        assert_eq!(seq.commands(), expected(|s| {
            s.wait(3);
        }));
        assert_eq!(seq.unrecognized(), ["foo".to_string()]);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let seq = block("Wait\n3\n").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.unrecognized(), ["Wait".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_end_delimiter_matches_end_of_stream() {
        let delimited = block("emit\n0\n100\nwait\n200\nend_delimiter\n").unwrap();
        let open = block("emit\n0\n100\nwait\n200\n").unwrap();
        assert_eq!(delimited, open);
    }

    #[test]
    fn test_lines_after_end_delimiter_are_left_unread() {
        let mut source = str_lines("wait\n1\nend_delimiter\nfan\n10\n");
        let seq = Decoder::Word.decode(&mut source).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(source.next_line().unwrap().as_deref(), Some("fan"));
    }

    #[test]
    fn test_truncated_emit() {
        assert!(matches!(
            block("wait\n1\nemit\n"),
            Err(Error::TruncatedInput {
                command: "emit",
                field: "spray"
            })
        ));
    }

    #[test]
    fn test_malformed_argument() {
        match block("fan\nfast\n") {
            Err(Error::MalformedArgument { command, line, .. }) => {
                assert_eq!(command, "fan");
                assert_eq!(line, "fast");
            }
            other => panic!("expected malformed argument, got {other:?}"),
        }
    }

    #[test]
    fn test_end_delimiter_as_argument_is_malformed() {
        assert!(matches!(
            block("wait\nend_delimiter\n"),
            Err(Error::MalformedArgument { command: "wait", .. })
        ));
    }

    #[test]
    fn test_empty_block() {
        assert!(block("end_delimiter\n").unwrap().is_empty());
        assert!(block("").unwrap().is_empty());
    }

    #[test]
    fn test_read_header_skips_preamble() {
        let mut source = str_lines("boot\nready\nstart_delimiter\n0\nwait\n");
        assert_eq!(read_header(&mut source).unwrap(), 0);
        assert_eq!(source.next_line().unwrap().as_deref(), Some("wait"));
    }

    #[test]
    fn test_read_header_without_start() {
        assert!(matches!(
            read_header(&mut str_lines("wait\n5\n")),
            Err(Error::NoStartDelimiter)
        ));
        assert!(matches!(
            read_header(&mut str_lines("")),
            Err(Error::NoStartDelimiter)
        ));
    }

    #[test]
    fn test_read_header_malformed() {
        match read_header(&mut str_lines("start_delimiter\nword\n")) {
            Err(Error::MalformedHeader { line }) => assert_eq!(line, "word"),
            other => panic!("expected malformed header, got {other:?}"),
        }
        assert!(matches!(
            read_header(&mut str_lines("start_delimiter\n")),
            Err(Error::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_decode_stream_unknown_decoder() {
        let mut source = str_lines("start_delimiter\n99\nwait\n5\n");
        assert!(matches!(
            decode_stream(&mut source),
            Err(Error::UnknownDecoder { id: 99 })
        ));
        // No decode was attempted.
        assert_eq!(source.next_line().unwrap().as_deref(), Some("wait"));
    }

    #[test]
    fn test_decode_str() {
        let seq = decode_str("\nstart_delimiter\n0\nwait\n5\nend_delimiter\n").unwrap();
        assert_eq!(seq.commands(), expected(|s| {
            s.wait(5);
        }));
    }

    #[test]
    fn test_non_utf8_preamble_is_discarded() {
        let data: &[u8] = b"\xff\xfe boot\nstart_delimiter\n0\nwait\n5\n";
        let seq = decode_stream(&mut byte_lines(data)).unwrap();
        assert_eq!(seq.commands(), expected(|s| {
            s.wait(5);
        }));

        let data: &[u8] = b"\xff\xfe boot\nstart_delimiter\n0\nwait\n5\n";
        let seq = decode_stream(&mut std::io::BufRead::lines(data)).unwrap();
        assert_eq!(seq.commands(), expected(|s| {
            s.wait(5);
        }));
    }

    #[test]
    fn test_non_utf8_line_in_block_is_skipped() {
        let data: &[u8] = b"start_delimiter\n0\n\xc3\x28\nfan\n700\n";
        let seq = decode_stream(&mut std::io::BufRead::lines(data)).unwrap();
        assert_eq!(seq.commands(), expected(|s| {
            s.set_fan_rpm(700);
        }));
        assert_eq!(seq.unrecognized().len(), 1);
    }

    #[test]
    fn test_decode_file() {
        let path = std::env::temp_dir().join(format!(
            "transmitter_decode_file_{}.txt",
            std::process::id()
        ));
        std::fs::write(
            &path,
            b"\xfe noise\r\nstart_delimiter\r\n0\r\nemit\r\n1\r\n300\r\nend_delimiter\r\n",
        )
        .unwrap();

        let seq = decode_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(seq.unwrap().commands(), expected(|s| {
            s.emit(Spray::Spray2, 300);
        }));
    }

    #[test]
    fn test_decode_file_missing() {
        assert!(matches!(
            decode_file("/nonexistent/transmission.txt"),
            Err(Error::Io(_))
        ));
    }
}
