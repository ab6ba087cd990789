use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transmitter::actuator::{ConsoleActuator, Pacing};
use transmitter::error::EXIT_FAILURE;
use transmitter::line_source::byte_lines;
use transmitter::{Engine, Error};

#[derive(Parser, Debug)]
#[command(
    name = "transmitter",
    about = "Decode a transmitter command block and run it on the rig",
    version
)]
struct Args {
    /// Read the transmission from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Take the real duration of every emit and wait
    #[arg(short, long)]
    paced: bool,

    /// Diagnostic filter, e.g. `info` or `transmitter=debug`
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<Error>()
                .map_or(EXIT_FAILURE, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    init_logging(&args.log_level)?;

    let pacing = if args.paced {
        Pacing::RealTime
    } else {
        Pacing::Immediate
    };
    let mut engine = Engine::new(ConsoleActuator::new().pacing(pacing));

    let executed = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            engine.run(&mut byte_lines(BufReader::new(file))).await?
        }
        None => engine.run(&mut byte_lines(io::stdin().lock())).await?,
    };

    info!(executed, "transmission complete");
    Ok(())
}

/// Diagnostics go to stderr; stdout carries only the actuator's reports.
fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log level: {filter}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
    Ok(())
}
