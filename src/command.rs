//! The [`TransmitterCommand`] trait, the closed [`Command`] type stored in a
//! sequence, and the [`Context`] commands receive when executed.

use crate::actuator::Actuator;
use crate::commands::{Emit, SetFanRpm, Wait};
use crate::error::Result;
use crate::line_source::ArgumentReader;
use async_trait::async_trait;
use std::fmt;

/// Which of the rig's two spray heads an [`Emit`] fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spray {
    Spray1,
    Spray2,
}

impl Spray {
    /// Map a wire selector (`0` or `1`) to a spray head.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            0 => Some(Spray::Spray1),
            1 => Some(Spray::Spray2),
            _ => None,
        }
    }

    /// The wire selector for this spray head.
    pub fn selector(self) -> i64 {
        match self {
            Spray::Spray1 => 0,
            Spray::Spray2 => 1,
        }
    }
}

impl fmt::Display for Spray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}

/// Execution context passed to [`TransmitterCommand::execute`].
///
/// Wraps the actuator that performs the physical side effect of each command.
pub struct Context {
    pub(crate) actuator: Box<dyn Actuator>,
}

impl Context {
    pub fn new(actuator: Box<dyn Actuator>) -> Self {
        Self { actuator }
    }

    /// The side-effect hook commands drive.
    pub fn actuator(&mut self) -> &mut dyn Actuator {
        self.actuator.as_mut()
    }
}

/// A single transmitter command kind.
///
/// To add a command:
///
/// 1. Define `pub const NAME: &'static str` on the struct: the keyword line
///    that introduces it in a command block.
/// 2. Add a variant to [`Command`] and a `From` conversion for it.
/// 3. Add one entry to the keyword table in [`crate::decoder`]:
///    `(MyCmd::NAME, MyCmd::decode_command)`.
#[async_trait(?Send)]
pub trait TransmitterCommand: 'static {
    /// The keyword, accessible at runtime.
    fn name(&self) -> &'static str;

    /// Read this command's argument lines, which follow the keyword line.
    ///
    /// Must either consume all of its arguments and return a complete value,
    /// or fail; partially-read commands are never produced.
    fn decode(args: &mut ArgumentReader<'_>) -> Result<Self>
    where
        Self: Sized;

    /// Decode and wrap in [`Command`]. This is the function-pointer type
    /// stored in the keyword table.
    fn decode_command(args: &mut ArgumentReader<'_>) -> Result<Command>
    where
        Self: Sized + Into<Command>,
    {
        Ok(Self::decode(args)?.into())
    }

    /// The argument lines for this command, keyword excluded, in wire order.
    fn encode(&self) -> Vec<String>;

    /// Perform the command's side effect.
    async fn execute(&self, ctx: &mut Context) -> anyhow::Result<()>;
}

/// One decoded, directly executable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Emit(Emit),
    Wait(Wait),
    SetFanRpm(SetFanRpm),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Emit(cmd) => cmd.name(),
            Command::Wait(cmd) => cmd.name(),
            Command::SetFanRpm(cmd) => cmd.name(),
        }
    }

    pub fn encode(&self) -> Vec<String> {
        match self {
            Command::Emit(cmd) => cmd.encode(),
            Command::Wait(cmd) => cmd.encode(),
            Command::SetFanRpm(cmd) => cmd.encode(),
        }
    }

    pub async fn execute(&self, ctx: &mut Context) -> anyhow::Result<()> {
        match self {
            Command::Emit(cmd) => cmd.execute(ctx).await,
            Command::Wait(cmd) => cmd.execute(ctx).await,
            Command::SetFanRpm(cmd) => cmd.execute(ctx).await,
        }
    }
}

impl From<Emit> for Command {
    fn from(cmd: Emit) -> Self {
        Command::Emit(cmd)
    }
}

impl From<Wait> for Command {
    fn from(cmd: Wait) -> Self {
        Command::Wait(cmd)
    }
}

impl From<SetFanRpm> for Command {
    fn from(cmd: SetFanRpm) -> Self {
        Command::SetFanRpm(cmd)
    }
}
