use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tur_inc::{
    binary_increment, Renderer, SimulationConfig, TuringMachine, DEFAULT_LEASH, DEFAULT_WINDOW,
};

/// Runs a Turing machine that adds one to a binary counter, forever, printing the tape after
/// every step.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of steps to execute
    #[clap(short = 'n', long, default_value_t = DEFAULT_LEASH)]
    steps: usize,

    /// First tape position shown (inclusive)
    #[clap(long, default_value_t = DEFAULT_WINDOW.start, allow_hyphen_values = true)]
    window_start: i64,

    /// Last tape position shown (exclusive)
    #[clap(long, default_value_t = DEFAULT_WINDOW.end, allow_hyphen_values = true)]
    window_end: i64,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            leash: self.steps,
            window_start: self.window_start,
            window_end: self.window_end,
        }
    }
}

fn main() {
    // Logs go to stderr so the trace on stdout stays untouched.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let config = cli.config();
    config.validate().context("invalid simulation config")?;

    let program = binary_increment();
    let name = program.name.clone();
    let mut machine = TuringMachine::try_new(program)
        .with_context(|| format!("program '{}' failed analysis", name))?;
    let renderer = Renderer::new(config.window())?;

    info!(program = %name, leash = config.leash, "running");
    machine
        .run(config.leash, &renderer, &mut out)
        .with_context(|| format!("run stopped after {} steps", machine.step_count()))?;

    out.flush().context("failed to flush stdout")?;
    info!(steps = machine.step_count(), "done");

    Ok(())
}
