use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.bikeshare-explorer/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.bikeshare-explorer/`
/// - `~/.bikeshare-explorer/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let explorer_dir = home.join(".bikeshare-explorer");
    std::fs::create_dir_all(&explorer_dir)?;
    std::fs::create_dir_all(explorer_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive,
/// falling back to `"info"` if the level string is not recognised. Diagnostic
/// output goes to `log_file` when one is given, otherwise to stderr; stdout
/// stays reserved for the interactive prompts and statistics.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let subscriber = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(subscriber)
                .init();
        }
        None => {
            let subscriber = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(subscriber)
                .init();
        }
    }

    Ok(())
}

// ── Data-directory discovery ───────────────────────────────────────────────────

/// Resolve the directory holding the city CSV files.
///
/// Uses the explicitly configured directory when given; otherwise prefers a
/// `data/` directory under the current working directory when it exists, and
/// finally falls back to the current working directory itself.
pub fn discover_data_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }

    let local_data = PathBuf::from("data");
    if local_data.is_dir() {
        return local_data;
    }

    PathBuf::from(".")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
