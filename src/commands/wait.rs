//! [`Wait`] command — pauses the rig for a fixed duration.
//!
//! Wire form: `wait`, then the duration in milliseconds.

use crate::command::{Context, TransmitterCommand};
use crate::error::Result;
use crate::line_source::ArgumentReader;
use async_trait::async_trait;

/// Pauses for `duration` milliseconds before the next command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    pub duration: i64,
}

impl Wait {
    pub const NAME: &'static str = "wait";

    pub fn new(duration: i64) -> Self {
        Self { duration }
    }
}

#[async_trait(?Send)]
impl TransmitterCommand for Wait {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decode(args: &mut ArgumentReader<'_>) -> Result<Self> {
        Ok(Self {
            duration: args.next_int("duration")?,
        })
    }

    fn encode(&self) -> Vec<String> {
        vec![self.duration.to_string()]
    }

    async fn execute(&self, ctx: &mut Context) -> anyhow::Result<()> {
        ctx.actuator().wait(self.duration).await
    }
}
