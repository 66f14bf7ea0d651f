//! Command-line parser for the `lotsim` binary.
//!
//! Hand-rolled, no clap dependency.
//!
//! # Grammar
//!
//! ```text
//! lotsim <lot-design-file> <hourly-arrival-rate> [FLAGS]
//! lotsim --help | -h
//! ```
//!
//! Flags accept both `--flag N` and `--flag=N`.

use std::fmt;
use std::path::PathBuf;

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: lotsim <lot-design-file> <hourly-arrival-rate> [FLAGS]
Example: lotsim parking.inf 11

Flags:
  --steps N          ticks (simulated seconds) to run [default: 86400]
  --max-duration N   seconds after which a parked car must leave [default: 28800]
  --seed N           random seed [default: 0]
  --show-lot         print the lot design and final occupancy
  -v, -vv            log run summary (-v) or every event (-vv) to stderr
  -h, --help         print this help";

/// Parsed arguments for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub design: PathBuf,
    pub hourly_rate: u64,
    pub steps: Option<u64>,
    pub max_duration: Option<u64>,
    pub seed: u64,
    pub show_lot: bool,
    pub verbosity: u8,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunArgs),
    Help,
}

/// Argument errors. All exit with status 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// Fewer than two positional arguments.
    MissingArguments,
    /// The rate is not a positive decimal integer.
    BadRate,
    /// A flag value is missing or not a non-negative integer.
    BadValue { flag: String, value: Option<String> },
    UnknownFlag(String),
    UnexpectedArgument(String),
}

impl UsageError {
    /// Whether the usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        !matches!(self, Self::BadRate)
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArguments => write!(f, "error: expected a lot-design file and an hourly rate"),
            Self::BadRate => write!(f, "The hourly rate of arrival should be a positive integer!"),
            Self::BadValue { flag, value: Some(v) } => {
                write!(f, "error: {flag} expects a non-negative integer, got '{v}'")
            }
            Self::BadValue { flag, value: None } => write!(f, "error: {flag} requires a value"),
            Self::UnknownFlag(flag) => write!(f, "error: unknown flag: {flag}"),
            Self::UnexpectedArgument(arg) => write!(f, "error: unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for UsageError {}

/// Parse arguments, excluding the program name.
pub fn parse<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut positional: Vec<String> = Vec::new();
    let mut steps = None;
    let mut max_duration = None;
    let mut seed = 0;
    let mut show_lot = false;
    let mut verbosity = 0u8;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
            _ => (arg.clone(), None),
        };
        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--show-lot" => show_lot = true,
            "-v" => verbosity = verbosity.saturating_add(1),
            "-vv" => verbosity = verbosity.saturating_add(2),
            "--steps" | "--max-duration" | "--seed" => {
                let value = inline.or_else(|| args.next());
                let n = parse_number(&flag, value)?;
                match flag.as_str() {
                    "--steps" => steps = Some(n),
                    "--max-duration" => max_duration = Some(n),
                    _ => seed = n,
                }
            }
            _ if flag.starts_with('-') && flag.len() > 1 && !is_negative_number(&flag) => {
                return Err(UsageError::UnknownFlag(arg));
            }
            _ => {
                if positional.len() == 2 {
                    return Err(UsageError::UnexpectedArgument(arg));
                }
                positional.push(arg);
            }
        }
    }

    let mut positional = positional.into_iter();
    let (Some(design), Some(rate)) = (positional.next(), positional.next()) else {
        return Err(UsageError::MissingArguments);
    };

    Ok(Command::Run(RunArgs {
        design: PathBuf::from(design),
        hourly_rate: parse_rate(&rate)?,
        steps,
        max_duration,
        seed,
        show_lot,
        verbosity,
    }))
}

/// `-` followed by digits: a bad rate, not a flag.
fn is_negative_number(arg: &str) -> bool {
    arg[1..].bytes().all(|b| b.is_ascii_digit())
}

/// Decimal digits only, and non-zero.
fn parse_rate(text: &str) -> Result<u64, UsageError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UsageError::BadRate);
    }
    match text.parse::<u64>() {
        Ok(0) | Err(_) => Err(UsageError::BadRate),
        Ok(n) => Ok(n),
    }
}

fn parse_number(flag: &str, value: Option<String>) -> Result<u64, UsageError> {
    let Some(v) = value else {
        return Err(UsageError::BadValue {
            flag: flag.to_string(),
            value: None,
        });
    };
    v.parse().map_err(|_| UsageError::BadValue {
        flag: flag.to_string(),
        value: Some(v),
    })
}
