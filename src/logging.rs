//! Logging setup for the biography page
//!
//! Logs go to the console and to a daily-rolling file in the platform data
//! directory. Call [`init`] once at startup, then use the `tracing` macros:
//!
//! ```no_run
//! bio_page::logging::init().expect("Failed to initialize logging");
//! tracing::info!("Page built");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const APP_DIR: &str = "bio_page";

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/bio_page/logs`
/// - macOS: `~/Library/Application Support/bio_page/logs`
/// - Linux: `~/.local/share/bio_page/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;

    let log_dir = base_dir.join(APP_DIR).join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

fn env_filter() -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")
}

/// Initializes console and rolling-file logging.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
///
/// # Errors
///
/// Returns error if the log directory cannot be created, the file appender
/// fails, or a global subscriber is already installed.
pub fn init() -> Result<()> {
    let log_dir = get_log_dir()?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(7)
        .filename_prefix(APP_DIR)
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create file appender")?;

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .pretty();

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(file_appender);

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized, log directory: {}", log_dir.display());

    Ok(())
}

/// Console-only logging, used when the log directory is unavailable.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_console() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(fmt::layer().with_target(true))
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Which sink [`init_with_fallback`] managed to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Console plus the rolling log file
    File,
    /// Console only
    Console,
}

/// Tries [`init`], falling back to [`init_console`] when file logging fails.
///
/// # Errors
///
/// Returns error carrying both causes when neither subscriber can be installed.
pub fn init_with_fallback() -> Result<LogTarget> {
    let file_err = match init() {
        Ok(()) => return Ok(LogTarget::File),
        Err(err) => err,
    };

    match init_console() {
        Ok(()) => {
            tracing::warn!("File logging unavailable: {file_err:#}");
            Ok(LogTarget::Console)
        }
        Err(console_err) => {
            Err(console_err.context(format!("File logging unavailable: {file_err:#}")))
        }
    }
}
