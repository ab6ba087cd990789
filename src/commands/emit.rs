//! [`Emit`] command — fires one spray head for a duration.
//!
//! Wire form: `emit`, then the spray selector (`0` or `1`), then the duration
//! in milliseconds, each on its own line.

use crate::command::{Context, Spray, TransmitterCommand};
use crate::error::{Error, Result};
use crate::line_source::ArgumentReader;
use async_trait::async_trait;

/// Fires `spray` for `duration` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emit {
    pub spray: Spray,
    pub duration: i64,
}

impl Emit {
    pub const NAME: &'static str = "emit";

    pub fn new(spray: Spray, duration: i64) -> Self {
        Self { spray, duration }
    }
}

#[async_trait(?Send)]
impl TransmitterCommand for Emit {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decode(args: &mut ArgumentReader<'_>) -> Result<Self> {
        let (line, selector) = args.next_line_int("spray")?;
        let spray = Spray::from_selector(selector).ok_or_else(|| Error::MalformedArgument {
            command: args.command(),
            field: "spray",
            line,
            reason: "spray selector must be 0 or 1".to_string(),
        })?;
        let duration = args.next_int("duration")?;
        Ok(Self { spray, duration })
    }

    fn encode(&self) -> Vec<String> {
        vec![self.spray.selector().to_string(), self.duration.to_string()]
    }

    async fn execute(&self, ctx: &mut Context) -> anyhow::Result<()> {
        ctx.actuator().emit(self.spray, self.duration).await
    }
}
