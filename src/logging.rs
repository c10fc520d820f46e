//! Structured logging configuration for textpattern.
//!
//! Uses `tracing` with `tracing-subscriber` for configurable log levels
//! and structured output.
//!
//! ## Environment Variables
//!
//! - `TEXTPATTERN_LOG` or `RUST_LOG`: Set log level (e.g., `debug`, `textpattern=debug,warn`)
//! - `TEXTPATTERN_LOG_FORMAT`: Set output format (`pretty`, `compact`, `json`)
//!
//! The interactive app owns the terminal, so it logs to a file instead of
//! stderr; the one-shot commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "textpattern=info,warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable with colors and indentation
    #[default]
    Pretty,
    /// Compact single-line output
    Compact,
    /// JSON output for log aggregation
    Json,
}

impl LogFormat {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    #[default]
    Stderr,
    /// Append to a file, creating parent directories as needed.
    File(PathBuf),
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log filter directive (e.g., "debug", "textpattern=debug,warn")
    pub filter: String,
    /// Output format
    pub format: LogFormat,
    /// Include file/line in logs
    pub with_file: bool,
    /// Include target (module path)
    pub with_target: bool,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Pretty,
            with_file: false,
            with_target: true,
            target: LogTarget::Stderr,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let filter = std::env::var("TEXTPATTERN_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        let format = std::env::var("TEXTPATTERN_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();

        Self {
            filter,
            format,
            ..Default::default()
        }
    }

    pub fn log_to_file(mut self, path: PathBuf) -> Self {
        self.target = LogTarget::File(path);
        self
    }
}

/// Initialize the global tracing subscriber.
///
/// Should be called once at startup; later calls are ignored.  If the log
/// file cannot be opened, logging stays disabled.
pub fn init(config: LogConfig) {
    let env_filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match &config.target {
        LogTarget::Stderr => install(env_filter, &config, std::io::stderr, true),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
                install(env_filter, &config, Mutex::new(file), false);
            }
        }
    }
}

fn install<W>(env_filter: EnvFilter, config: &LogConfig, writer: W, ansi: bool)
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    match config.format {
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_file(config.with_file)
                    .with_line_number(config.with_file)
                    .with_target(config.with_target),
            );
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .compact()
                    .with_ansi(ansi)
                    .with_writer(writer)
                    .with_file(config.with_file)
                    .with_line_number(config.with_file)
                    .with_target(config.with_target),
            );
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .pretty()
                    .with_ansi(ansi)
                    .with_writer(writer)
                    .with_file(config.with_file)
                    .with_line_number(config.with_file)
                    .with_target(config.with_target),
            );
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
    }
}
