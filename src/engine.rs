use crate::actuator::{Actuator, ConsoleActuator};
use crate::command::Context;
use crate::decoder::decode_stream;
use crate::error::{Error, Result};
use crate::line_source::LineSource;
use crate::sequence::CommandSequence;
use tracing::{debug, info};

/// Runs decoded command sequences against an [`Actuator`].
pub struct Engine {
    ctx: Context,
}

impl Engine {
    pub fn new(actuator: impl Actuator + 'static) -> Self {
        Engine {
            ctx: Context::new(Box::new(actuator)),
        }
    }

    /// An engine that reports every action on stdout.
    pub fn console() -> Self {
        Self::new(ConsoleActuator::new())
    }

    /// Execute every command of `seq` once, in order.
    ///
    /// Stops at the first failing command; the commands before it have
    /// already run. Returns the number of commands executed.
    pub async fn execute(&mut self, seq: CommandSequence) -> Result<usize> {
        let total = seq.len();
        for (index, command) in seq.into_iter().enumerate() {
            debug!(index, command = command.name(), "executing");
            command
                .execute(&mut self.ctx)
                .await
                .map_err(|source| Error::Actuator {
                    command: command.name(),
                    source,
                })?;
        }
        info!(commands = total, "executed");
        Ok(total)
    }

    /// One full cycle: frame, decode, then execute.
    ///
    /// Nothing executes unless the whole block decoded cleanly.
    pub async fn run(&mut self, source: &mut dyn LineSource) -> Result<usize> {
        let seq = decode_stream(source)?;
        self.execute(seq).await
    }
}
