//! Command-line interface for rollupd.
use std::{fmt, str::FromStr};

use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Wrapper around `LevelFilter` so clap can parse log levels from either
/// string names ("info", "debug", etc.) or numeric shorthands (0-5).
#[derive(Clone, Copy, Debug)]
pub struct LogLevelArg(LevelFilter);

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        arg.0
    }
}

impl FromStr for LogLevelArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("log level cannot be empty".into());
        }

        if let Ok(number) = trimmed.parse::<u8>() {
            let level = match number {
                0 => LevelFilter::OFF,
                1 => LevelFilter::ERROR,
                2 => LevelFilter::WARN,
                3 => LevelFilter::INFO,
                4 => LevelFilter::DEBUG,
                5 => LevelFilter::TRACE,
                _ => {
                    return Err(format!(
                        "unsupported log level number '{number}' (expected 0-5)"
                    ));
                }
            };

            return Ok(LogLevelArg(level));
        }

        trimmed
            .parse::<LevelFilter>()
            .map(LogLevelArg)
            .map_err(|err| format!("invalid log level '{trimmed}': {err}"))
    }
}

impl fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Command-line arguments for the node binary.
#[derive(Parser, Debug)]
#[command(
    name = "rollupd",
    version,
    about = "Supervisor for rollup node auxiliary services."
)]
pub struct Cli {
    /// Overrides the configured log level (error, warn, info, debug, trace, or 0-5).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Parses the process arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
