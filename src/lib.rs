//! # Transmitter
//!
//! Decoder and executor for the spray rig's line protocol.
//!
//! A controller sends the rig a transmission: some noise, a
//! `start_delimiter` line, a decoder id, then a block of commands, one
//! keyword per line followed by its integer arguments on the lines after it.
//! This crate frames the transmission, decodes the block into a
//! [`CommandSequence`] and runs it, in order, against an [`Actuator`].
//!
//! ## Quick start
//!
//! ```no_run
//! use transmitter::Engine;
//! use transmitter::line_source::str_lines;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transmission = "\
//! start_delimiter
//! 0
//! fan
//! 1200
//! emit
//! 0
//! 500
//! wait
//! 1000
//! end_delimiter
//! ";
//!
//!     let mut engine = Engine::console();
//!     engine.run(&mut str_lines(transmission)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Command block
//!
//! | Keyword | Following lines | Command |
//! |---------|-----------------|---------|
//! | `emit` | spray (`0` or `1`), duration | [`Emit`] |
//! | `wait` | duration | [`Wait`] |
//! | `fan` | rpm | [`SetFanRpm`] |
//!
//! Any other line is reported and skipped without consuming arguments. A
//! missing or non-integer argument line fails the whole block, and nothing
//! is executed.
//!
//! ## Sending
//!
//! Build a [`CommandSequence`] and encode it with [`Encoder`]:
//!
//! ```
//! use transmitter::{CommandSequence, Encoder, Spray};
//!
//! let mut seq = CommandSequence::new();
//! seq.wait(1000).emit(Spray::Spray1, 500);
//! let frame = Encoder::Word.encode(&seq);
//! assert!(frame.contains("start_delimiter\n0\nwait\n1000\n"));
//! ```

pub mod actuator;
pub mod command;
pub mod commands;
pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod line_source;
pub mod sequence;

pub use actuator::{Actuator, ConsoleActuator, Pacing};
pub use command::{Command, Context, Spray, TransmitterCommand};
pub use commands::{Emit, SetFanRpm, Wait};
pub use decoder::{Decoder, decode_file, decode_str, decode_stream, find_decoder};
pub use encoder::Encoder;
pub use engine::Engine;
pub use error::{Error, Result};
pub use line_source::{LineSource, byte_lines, str_lines};
pub use sequence::CommandSequence;
