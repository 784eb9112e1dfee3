//! IPC layer between the CLI and the ConnectTool service.
//!
//! This crate provides:
//! - Local socket client (Unix domain socket, or the platform equivalent)
//! - Deadline-bounded request/response calls
//! - A single error type for every transport and remote failure

mod client;
mod error;

pub use client::{IpcClient, IpcConnection};
pub use connect_protocol as protocol;
pub use error::{IpcError, IpcResult};
