//! The side-effect hook commands drive, and the console stand-in for the rig.

use crate::command::Spray;
use anyhow::Result;
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

type OutputHandler = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// Performs the physical action behind each command.
///
/// Implementations own their error contract; the engine stops at the first
/// failure and reports which command caused it.
#[async_trait(?Send)]
pub trait Actuator {
    /// Fire `spray` for `duration` milliseconds.
    async fn emit(&mut self, spray: Spray, duration: i64) -> Result<()>;

    /// Hold for `duration` milliseconds.
    async fn wait(&mut self, duration: i64) -> Result<()>;

    /// Set the fan speed.
    async fn set_fan_rpm(&mut self, rpm: i64) -> Result<()>;
}

/// Whether timed actions actually take their duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Report each action and move on.
    #[default]
    Immediate,
    /// Sleep for the duration of each `emit` and `wait`.
    RealTime,
}

/// Reports every action as a line of text instead of driving hardware.
pub struct ConsoleActuator {
    output_handler: OutputHandler,
    pacing: Pacing,
}

impl ConsoleActuator {
    /// Write reports to stdout.
    pub fn new() -> Self {
        Self::with_handler(|data| {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(data);
            let _ = stdout.flush();
        })
    }

    /// Send reports to a custom sink.
    pub fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&[u8]) + Send + Sync + 'static,
    {
        Self {
            output_handler: Arc::new(handler),
            pacing: Pacing::default(),
        }
    }

    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    fn report(&self, mut line: String) {
        line.push('\n');
        (self.output_handler)(line.as_bytes());
    }

    async fn hold(&self, duration: i64) {
        if self.pacing == Pacing::RealTime && duration > 0 {
            sleep(Duration::from_millis(duration as u64)).await;
        }
    }
}

impl Default for ConsoleActuator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Actuator for ConsoleActuator {
    async fn emit(&mut self, spray: Spray, duration: i64) -> Result<()> {
        self.report(format!(
            "emitting the alcohol for {duration} duration from spray {spray}"
        ));
        self.hold(duration).await;
        Ok(())
    }

    async fn wait(&mut self, duration: i64) -> Result<()> {
        self.report(format!("waiting for {duration} duration"));
        self.hold(duration).await;
        Ok(())
    }

    async fn set_fan_rpm(&mut self, rpm: i64) -> Result<()> {
        self.report(format!("setting fan to {rpm} rpm"));
        Ok(())
    }
}
