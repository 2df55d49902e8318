//! Tracing setup shared by the demos.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// CLI arguments for controlling tracing/logging output.
///
/// Embed with `#[command(flatten)]`.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (-v for debug, -vv for every comparison)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only print warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log output format
    #[arg(long = "log-format", default_value = "compact", global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl TracingArgs {
    /// Install the global subscriber. `RUST_LOG` wins over the flags.
    ///
    /// # Panics
    ///
    /// Panics if a subscriber is already installed.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = match (self.quiet, self.verbosity) {
                (true, _) => "warn",
                (false, 0) => "info",
                (false, 1) => "debug",
                (false, _) => "trace",
            };
            EnvFilter::new(format!("{level},five_card_showdown={level}"))
        });

        let registry = tracing_subscriber::registry().with(filter);
        match self.log_format {
            LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
            LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
            LogFormat::Json => registry.with(fmt::layer().json()).init(),
        }
    }
}
