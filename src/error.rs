//! Error taxonomy for framing, decoding and executing a command block.

use thiserror::Error;

/// Exit status for a fatal error other than an unknown decoder.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when the header names a decoder that is not registered.
pub const EXIT_UNKNOWN_DECODER: u8 = 2;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input ended before a start_delimiter line was found")]
    NoStartDelimiter,

    #[error("malformed decoder header: '{line}' is not an integer")]
    MalformedHeader { line: String },

    #[error("unknown decoder {id}")]
    UnknownDecoder { id: i64 },

    #[error("malformed argument '{line}' for {field} of '{command}': {reason}")]
    MalformedArgument {
        command: &'static str,
        field: &'static str,
        line: String,
        reason: String,
    },

    #[error("input ended while reading {field} of '{command}'")]
    TruncatedInput {
        command: &'static str,
        field: &'static str,
    },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("'{command}' failed")]
    Actuator {
        command: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Unknown decoders get their own status so callers can tell a protocol
    /// version mismatch apart from a damaged stream.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UnknownDecoder { .. } => EXIT_UNKNOWN_DECODER,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
