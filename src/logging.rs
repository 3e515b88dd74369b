use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "reposcout=info";

/// Where interactive mode writes logs when `--log-file` is not given.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("reposcout.log")
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("reposcout=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

/// Install the global subscriber.
///
/// With `log_file` set, events are appended to that file without ANSI colors,
/// leaving the terminal to the TUI. Otherwise they go to stderr.
pub fn init_tracing(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}
