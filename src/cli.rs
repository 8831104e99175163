//! Command-line arguments.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use chess_headers::chess::CompressionMode;
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "chess-headers",
    version,
    about = "Extract per-game header metadata from a PGN file into CSV",
    long_about = "Extract per-game header metadata (players, ratings, result, timing) \
                  from a PGN file into CSV.\n\n\
                  Games whose headers cannot be mapped are skipped and listed \
                  after loading."
)]
pub struct Cli {
    /// PGN file to read (plain or zstd compressed).
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// CSV file to write (created or overwritten).
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Load at most this many games.
    #[arg(long = "max-games", value_name = "N")]
    pub max_games: Option<usize>,

    /// Print a progress line every N games.
    #[arg(long = "report-every", value_name = "N", default_value = "10000")]
    pub report_every: NonZeroUsize,

    /// Input compression; auto picks zstd for `.zst` files.
    #[arg(long = "compression", value_enum, default_value = "auto")]
    pub compression: CompressionArg,

    /// Also write the damaged headers and their causes as JSON Lines.
    #[arg(long = "damaged-out", value_name = "PATH")]
    pub damaged_out: Option<PathBuf>,

    /// Diagnostic log level on stderr (CHESS_LOG overrides).
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevelArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CompressionArg {
    Auto,
    Plain,
    Zstd,
}

impl CompressionArg {
    pub fn resolve(self, path: &Path) -> CompressionMode {
        match self {
            Self::Auto => CompressionMode::detect(path),
            Self::Plain => CompressionMode::Plain,
            Self::Zstd => CompressionMode::Zstd,
        }
    }
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
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}
