//! Diagnostics via `tracing`, written to stderr.
//!
//! Standard output belongs to the progress/summary lines, so log records
//! never go there. `CHESS_LOG` takes an `EnvFilter` directive string (for
//! example `debug` or `chess_headers=trace`) and overrides the level chosen
//! by the caller.

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

pub const LOG_ENV_VAR: &str = "CHESS_LOG";

pub fn build_env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

pub fn init_logging(default_level: LevelFilter) -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(default_level))
        .with(layer)
        .try_init()
}
