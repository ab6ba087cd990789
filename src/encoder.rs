//! Encoding a [`CommandSequence`] into a transmission the decoders accept.
//!
//! This is the sending side of the protocol: an experiment builds a sequence
//! and writes the encoded frame to the rig's serial link.

use crate::decoder::{Decoder, END_DELIMITER, START_DELIMITER};
use crate::sequence::CommandSequence;

/// Encoder implementations, paired with the decoder that reads their output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoder {
    Word,
}

impl Encoder {
    /// The decoder identifier written into the header.
    pub fn id(self) -> i64 {
        self.decoder().id()
    }

    /// The decoder that reads this encoder's output.
    pub fn decoder(self) -> Decoder {
        match self {
            Encoder::Word => Decoder::Word,
        }
    }

    /// Encode `seq` as one complete frame.
    ///
    /// The frame starts with an empty line so a receiver that has buffered a
    /// partial line (e.g. boot noise) still sees the start delimiter on a line
    /// of its own.
    ///
    /// ```
    /// use transmitter::{CommandSequence, Encoder};
    ///
    /// let mut seq = CommandSequence::new();
    /// seq.wait(5);
    /// assert_eq!(
    ///     Encoder::Word.encode(&seq),
    ///     "\nstart_delimiter\n0\nwait\n5\nend_delimiter\n"
    /// );
    /// ```
    pub fn encode(self, seq: &CommandSequence) -> String {
        match self {
            Encoder::Word => encode_words(self.id(), seq),
        }
    }
}

fn encode_words(id: i64, seq: &CommandSequence) -> String {
    let mut lines = vec![String::new(), START_DELIMITER.to_string(), id.to_string()];
    for command in seq {
        lines.push(command.name().to_string());
        lines.extend(command.encode());
    }
    lines.push(END_DELIMITER.to_string());

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
