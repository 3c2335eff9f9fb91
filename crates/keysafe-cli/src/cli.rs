//! Command line surface of `keysafe`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use keysafe_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "keysafe",
    version,
    about = "Inspect Key Safe wallet state snapshots",
    long_about = "Reads a JSON dump of the Key Safe store and prints what the wallet\n\
                  UI derives from it: the selected account and its keyring, balances,\n\
                  token rates and pending signature requests."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More output with -v/-vv, less with -q.
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub color: Color,

    /// Log level for keysafe crates; takes precedence over -v/-q and RUST_LOG.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Append logs to this file rather than stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Print account addresses in logs instead of a placeholder.
    #[arg(long = "log-addresses", global = true)]
    pub log_addresses: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Selected account, keyring, balance and token rates.
    Summary(SnapshotArgs),

    /// Every account merged with its identity.
    Accounts(SnapshotArgs),

    /// Pending signature requests, newest first.
    Transactions(SnapshotArgs),
}

#[derive(Parser)]
pub struct SnapshotArgs {
    /// JSON snapshot of the wallet store.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Emit JSON rather than a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// An explicit `--log-level` wins over `-v/-q`; either one disables
    /// `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            log_addresses: self.log_addresses,
            ..LogConfig::default()
        }
    }
}
