//! `lotsim` command-line program.
//!
//! Loads a lot design, runs one simulation, and prints every gate event
//! followed by a timing line and the length of the queue left at the gate.

mod cli;
mod report;

use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use lotsim::engine::{ConfigError, SimConfig, Simulator};
use lotsim::lot::{LotDesign, LotError, ParkingLot};

use cli::{Command, RunArgs, UsageError, USAGE};
use report::PrintSink;

/// Failures after argument parsing. All exit with status 1.
#[derive(Debug)]
enum RunError {
    Lot(LotError),
    Config(ConfigError),
    Output(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lot(e) => write!(f, "cannot load lot design: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Output(e) => write!(f, "cannot write output: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lot(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<LotError> for RunError {
    fn from(e: LotError) -> Self {
        Self::Lot(e)
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

fn main() -> ExitCode {
    let args = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => return usage_failure(&e),
    };

    report::init_logger(args.verbosity);

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn usage_failure(e: &UsageError) -> ExitCode {
    eprintln!("{e}");
    if e.wants_usage() {
        eprintln!();
        eprintln!("{USAGE}");
    }
    ExitCode::from(2)
}

fn config_for(args: &RunArgs) -> SimConfig {
    let mut config = SimConfig::new(args.hourly_rate).with_seed(args.seed);
    if let Some(steps) = args.steps {
        config = config.with_steps(steps);
    }
    if let Some(max) = args.max_duration {
        config = config.with_max_parking_duration(max);
    }
    config
}

fn run<W: Write>(args: &RunArgs, out: &mut W) -> Result<(), RunError> {
    let lot = ParkingLot::new(LotDesign::load(&args.design)?);
    let mut sim = Simulator::new(lot, config_for(args))?;

    writeln!(
        out,
        "Total number of parkable spots (capacity): {}",
        sim.lot().total_capacity()
    )?;
    writeln!(out, "=== SIMULATION START ===")?;

    let mut sink = PrintSink::new(&mut *out);
    let start = Instant::now();
    sim.simulate(&mut sink);
    let elapsed = start.elapsed();
    let out = sink.finish()?;

    writeln!(out, "=== SIMULATION END ===")?;
    writeln!(out)?;
    writeln!(out, "Simulation took {}ms.", elapsed.as_millis())?;
    writeln!(out)?;
    writeln!(
        out,
        "Length of car queue at the front at the end of simulation: {}",
        sim.drain_incoming()
    )?;

    if args.show_lot {
        writeln!(out)?;
        write!(out, "{}", sim.lot())?;
    }
    out.flush()?;
    Ok(())
}
