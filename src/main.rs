mod classifier;
mod engine;
mod models;
mod types;

use std::env;
use std::io::{stderr, stdin, stdout, BufWriter};
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::Converter;

const LOG_LEVEL_VARIABLE: &str = "ALFA2YNAB_LOG";

fn main() -> Result<()> {
    setup_logging(log_level_from_env());

    let converter = Converter::new();

    let timer = Instant::now();
    let count = converter.run(stdin().lock(), BufWriter::new(stdout().lock()))?;
    let duration = timer.elapsed();

    info!("Converted {count} statement rows in: {duration:?}");

    Ok(())
}

/// Reads the log level from `ALFA2YNAB_LOG`, `error` when unset or unrecognised.
fn log_level_from_env() -> LevelFilter {
    let Ok(level) = env::var(LOG_LEVEL_VARIABLE) else {
        return LevelFilter::ERROR;
    };

    level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("{LOG_LEVEL_VARIABLE}: unknown level '{level}', using 'error'");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    // stdout is the import file
    let stderr_log = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(stderr_log)
        .init();
}
