//! # Observability
//!
//! Logging setup shared by the ConnectTool binaries.
//!
//! Binaries call [`init_with_config`] once at startup and use standard
//! `tracing` macros everywhere else. Log output never goes to stdout, which
//! belongs to the command's rendered result:
//!
//! - a compact human-readable layer on stderr (optional)
//! - a JSONL layer appended to a log file (optional)
//!
//! `RUST_LOG` overrides the configured default level.
//!
//! ```rust,ignore
//! fn main() {
//!     observability::init_with_config(observability::LogConfig {
//!         service_name: "cli".into(),
//!         default_level: "warn".into(),
//!         also_stderr: true,
//!         ..Default::default()
//!     })
//!     .ok();
//!
//!     tracing::info!("ready");
//! }
//! ```

mod file;

use std::io;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use file::LogFileWriter;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name of the service (e.g. "cli"), recorded on the startup line.
    pub service_name: String,

    /// Default level filter (e.g. "debug", "warn").
    /// Overridden by the `RUST_LOG` environment variable.
    pub default_level: String,

    /// Append JSONL log lines to this file.
    pub log_path: Option<PathBuf>,

    /// Emit compact log lines on stderr.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: true,
        }
    }
}

/// Initialize logging with custom configuration.
///
/// Fails only when the log file cannot be opened. Calling this after a global
/// subscriber is already installed leaves the existing one in place.
pub fn init_with_config(config: LogConfig) -> io::Result<()> {
    let file_layer = match &config.log_path {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(LogFileWriter::open(path)?)
                .with_filter(env_filter(&config.default_level)),
        ),
        None => None,
    };

    let stderr_layer = config.also_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_writer(io::stderr)
            .with_filter(env_filter(&config.default_level))
    });

    let installed = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            service = %config.service_name,
            log_path = ?config.log_path,
            "observability initialized"
        );
    }

    Ok(())
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
