//! [`SetFanRpm`] command.
//!
//! Wire form: `fan`, then the target rpm.

use crate::command::{Context, TransmitterCommand};
use crate::error::Result;
use crate::line_source::ArgumentReader;
use async_trait::async_trait;

/// Sets the rig's fan to `rpm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetFanRpm {
    pub rpm: i64,
}

impl SetFanRpm {
    pub const NAME: &'static str = "fan";

    pub fn new(rpm: i64) -> Self {
        Self { rpm }
    }
}

#[async_trait(?Send)]
impl TransmitterCommand for SetFanRpm {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decode(args: &mut ArgumentReader<'_>) -> Result<Self> {
        Ok(Self {
            rpm: args.next_int("rpm")?,
        })
    }

    fn encode(&self) -> Vec<String> {
        vec![self.rpm.to_string()]
    }

    async fn execute(&self, ctx: &mut Context) -> anyhow::Result<()> {
        ctx.actuator().set_fan_rpm(self.rpm).await
    }
}
