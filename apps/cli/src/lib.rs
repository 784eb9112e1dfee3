//! ConnectTool CLI - control the lobby and VPN service from the command line.
//!
//! One invocation is one command: arguments are parsed into an
//! [`Invocation`], a single call is made to the service over its local
//! socket, and the response is rendered to stdout.

pub mod commands;
pub mod config;
pub mod output;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use commands::{Command, Session};
use config::{CliConfig, Platform};
use connect_ipc::IpcClient;
use output::{Output, OutputFormat};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// ConnectTool CLI - manage lobbies and the VPN through the ConnectTool service.
#[derive(Parser, Debug)]
#[command(name = "connecttoolcli")]
#[command(about = "Control the ConnectTool lobby and VPN service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the service socket [default: /tmp/connect_tool.sock, or connect_tool.sock on Windows]
    #[arg(long, value_name = "PATH", env = "CONNECTTOOL_SOCKET", global = true)]
    pub socket: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Append JSON log lines to this file
    #[arg(long, value_name = "PATH", env = "CONNECTTOOL_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

/// A parsed command line: what to run and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub config: CliConfig,
}

/// Parse process arguments (program name first).
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let config = CliConfig::from_cli(&cli, Platform::current());
    Ok(Invocation {
        command: cli.command,
        config,
    })
}

/// Full usage listing: every command and flag.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Connect, run the command, render the result.
pub async fn execute(invocation: &Invocation, out: &mut dyn Write) -> Result<()> {
    let config = &invocation.config;
    let client = IpcClient::new(&config.socket_path);
    debug!(socket = %client.socket_path().display(), "Connecting to service");

    let mut session = Session::open(&client, config.call_timeout)
        .await
        .context("did not connect")?;
    debug!(command = ?invocation.command, "Running command");

    let mut output = Output::new(config.format, out);
    invocation.command.execute(&mut session, &mut output).await
}

/// Run the CLI and return the process exit status.
///
/// 0 when the call round-tripped through the service, 1 on a usage error or
/// any transport or service failure.
pub async fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = match parse_invocation(args) {
        Ok(invocation) => invocation,
        Err(error) => return report_usage_error(&error, out, err),
    };

    if let Err(e) = observability::init_with_config(observability::LogConfig {
        service_name: "cli".into(),
        default_level: invocation.config.log_level.clone(),
        log_path: invocation.config.log_file.clone(),
        also_stderr: true,
    }) {
        let _ = writeln!(err, "Error: could not open log file: {}", e);
        return 1;
    }

    match execute(&invocation, out).await {
        Ok(()) => 0,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            let _ = writeln!(err, "Error: {:#}", e);
            1
        }
    }
}

/// Help and version requests succeed; every other parse failure prints the
/// error followed by the full usage and fails with status 1.
fn report_usage_error(error: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", error.render());
            0
        }
        _ => {
            let rendered = error.render().to_string();
            let message = rendered.split("\n\n").next().unwrap_or_default();
            let _ = writeln!(err, "{}", message.trim_end());
            let _ = writeln!(err);
            let _ = write!(err, "{}", usage());
            1
        }
    }
}
