//! # Logging Utilities
//!
//! Logging infrastructure for code-dbg using `tracing`.
//!
//! Both binaries in the workspace reserve stdout for their real output (the
//! launch URL, the fixture's report), so diagnostics always go to stderr and,
//! optionally, to a log file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use code_dbg_utils::init_logging;
//!
//! // Keep the guard alive for as long as logging is needed
//! let _guard = init_logging().expect("Failed to initialize logging");
//!
//! tracing::warn!("Something looks off");
//! tracing::debug!("Only visible with RUST_LOG=debug");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=code_dbg_core=trace`)
//! - `CODE_DBG_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `CODE_DBG_LOG_FILE`: Optional path to a log file (daily rolling, appended to)

use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "CODE_DBG_LOG_FORMAT";

/// Environment variable naming an optional log file
pub const LOG_FILE_ENV: &str = "CODE_DBG_LOG_FILE";

/// Level used when neither `RUST_LOG` nor an explicit level is given
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Warn;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default)
    Pretty,
    /// JSON format, one object per line
    Json,
}

impl LogFormat
{
    /// Read the format from `CODE_DBG_LOG_FORMAT`, falling back to [`LogFormat::Pretty`]
    #[must_use]
    pub fn from_env() -> Self
    {
        env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|s| LogFormat::from_str(&s).ok())
            .unwrap_or(LogFormat::Pretty)
    }
}

impl FromStr for LogFormat
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level (default)
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            )),
        }
    }
}

/// Keeps the background file writer alive
///
/// Dropping the guard flushes any buffered file output and stops the writer
/// thread, so hold it until `main` returns.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard
{
    _worker: Option<WorkerGuard>,
    file_path: Option<PathBuf>,
}

impl LoggingGuard
{
    /// Path of the log file, if file logging is active
    #[must_use]
    pub fn file_path(&self) -> Option<&Path>
    {
        self.file_path.as_deref()
    }
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables:
/// - `RUST_LOG`: Log level filter (default: `warn`)
/// - `CODE_DBG_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
/// - `CODE_DBG_LOG_FILE`: Optional path to log file
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - The log file directory cannot be created
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    init_logging_internal(LogFormat::from_env(), None)
}

/// Initialize logging with an explicit level and format
///
/// The explicit level wins over `RUST_LOG`; `CODE_DBG_LOG_FILE` is still honoured.
///
/// ## Example
///
/// ```rust,no_run
/// use code_dbg_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized or file logging fails.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LoggingGuard, LoggingError>
{
    init_logging_internal(format, Some(level.into()))
}

/// Build the level filter
///
/// Priority:
/// 1. An explicit level (from a `--log-level` flag)
/// 2. `RUST_LOG`, which may carry per-module directives
/// 3. [`DEFAULT_LEVEL`]
fn build_filter(explicit_level: Option<Level>) -> EnvFilter
{
    match explicit_level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::from(DEFAULT_LEVEL).to_string())),
    }
}

fn console_layer(format: LogFormat, filter: EnvFilter) -> BoxedLayer
{
    let ansi = io::stderr().is_terminal();
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(ansi)
            .with_writer(io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(io::stderr)
            .with_filter(filter)
            .boxed(),
    }
}

fn file_layer(format: LogFormat, filter: EnvFilter, writer: NonBlocking) -> BoxedLayer
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false) // No ANSI in files
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(filter)
            .boxed(),
    }
}

fn init_logging_internal(format: LogFormat, explicit_level: Option<Level>) -> Result<LoggingGuard, LoggingError>
{
    let mut layers: Vec<BoxedLayer> = vec![console_layer(format, build_filter(explicit_level))];
    let mut worker = None;

    let log_file = env::var_os(LOG_FILE_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);
    if let Some(file_path) = &log_file {
        let directory = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = file_path
            .file_name()
            .ok_or_else(|| LoggingError::InvalidFile(file_path.display().to_string()))?;
        std::fs::create_dir_all(&directory)?;

        let file_appender = tracing_appender::rolling::daily(&directory, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        layers.push(file_layer(format, build_filter(explicit_level), non_blocking));
        worker = Some(guard);
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;

    Ok(LoggingGuard {
        _worker: worker,
        file_path: log_file,
    })
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// The log file path has no file name component
    #[error("Invalid log file path: {0}")]
    InvalidFile(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}
