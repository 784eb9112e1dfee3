//! Runtime configuration resolved once at startup.

use crate::output::OutputFormat;
use crate::Cli;
use std::path::PathBuf;
use std::time::Duration;

/// Socket filename used on every platform.
const SOCKET_NAME: &str = "connect_tool.sock";
/// Directory holding the socket on non-Windows hosts.
const UNIX_SOCKET_DIR: &str = "/tmp";

/// Budget for one command: connecting plus the single service call.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Host platform family, as far as socket defaults are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Default service socket: `/tmp/connect_tool.sock`, or a bare
/// `connect_tool.sock` relative to the working directory on Windows.
pub fn default_socket_path(platform: Platform) -> PathBuf {
    match platform {
        Platform::Windows => PathBuf::from(SOCKET_NAME),
        Platform::Unix => PathBuf::from(UNIX_SOCKET_DIR).join(SOCKET_NAME),
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Path to the service socket
    pub socket_path: PathBuf,

    /// Deadline for connecting and completing the call
    pub call_timeout: Duration,

    /// How results are printed
    pub format: OutputFormat,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Optional JSONL log file
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    /// Resolve parsed flags against the platform defaults.
    pub fn from_cli(cli: &Cli, platform: Platform) -> Self {
        Self {
            socket_path: cli
                .socket
                .clone()
                .unwrap_or_else(|| default_socket_path(platform)),
            call_timeout: CALL_TIMEOUT,
            format: cli.format,
            log_level: cli.log_level.clone(),
            log_file: cli.log_file.clone(),
        }
    }
}
