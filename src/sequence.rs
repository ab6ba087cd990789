//! [`CommandSequence`] — the ordered block of commands for one execution cycle.

use crate::command::{Command, Spray};
use crate::commands::{Emit, SetFanRpm, Wait};

/// Commands in decode order, which is also execution order.
///
/// Built either by a decoder reading a command block or by hand with the
/// builder methods when preparing a block to send:
///
/// ```
/// use transmitter::{CommandSequence, Spray};
///
/// let mut seq = CommandSequence::new();
/// seq.wait(1000).emit(Spray::Spray1, 500).set_fan_rpm(1200);
/// assert_eq!(seq.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence {
    commands: Vec<Command>,
    unrecognized: Vec<String>,
}

impl CommandSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: impl Into<Command>) -> &mut Self {
        self.commands.push(command.into());
        self
    }

    pub fn emit(&mut self, spray: Spray, duration: i64) -> &mut Self {
        self.push(Emit::new(spray, duration))
    }

    pub fn wait(&mut self, duration: i64) -> &mut Self {
        self.push(Wait::new(duration))
    }

    pub fn set_fan_rpm(&mut self, rpm: i64) -> &mut Self {
        self.push(SetFanRpm::new(rpm))
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Lines the decoder skipped because they were not a known keyword.
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    pub(crate) fn record_unrecognized(&mut self, line: String) {
        self.unrecognized.push(line);
    }
}

impl IntoIterator for CommandSequence {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl FromIterator<Command> for CommandSequence {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
            unrecognized: Vec::new(),
        }
    }
}
