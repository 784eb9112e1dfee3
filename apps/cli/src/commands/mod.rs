//! CLI command implementations.
//!
//! Every command builds one request, makes one call through the [`Session`],
//! and renders the typed response. A `success: false` inside a response is
//! output, not an error.

mod friends;
mod lobby;
mod vpn;

pub use friends::{render_friend_lobbies, render_invite};
pub use lobby::{render_create, render_join, render_leave, render_lobby_info};
pub use vpn::{format_ipv4, render_routing_table, render_vpn_status};

use crate::output::Output;
use anyhow::Result;
use clap::{Args, Subcommand};
use connect_ipc::protocol::Call;
use connect_ipc::{IpcClient, IpcConnection, IpcResult};
use std::time::Duration;
use tokio::time::Instant;

/// Commands understood by the service.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new lobby
    Create(Extra),

    /// Join a lobby
    Join {
        /// Lobby ID
        lobby_id: String,
        #[command(flatten)]
        extra: Extra,
    },

    /// Leave current lobby
    Leave(Extra),

    /// Get current lobby info
    Info(Extra),

    /// List friend lobbies
    Friends(Extra),

    /// Invite a friend
    Invite {
        /// Friend's Steam ID
        friend_id: String,
        #[command(flatten)]
        extra: Extra,
    },

    /// Get VPN status
    VpnStatus(Extra),

    /// Get VPN routing table
    VpnRoutes(Extra),
}

// Positional words after a command's own arguments are accepted and dropped.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Extra {
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

impl Command {
    /// Run this command over an open session.
    pub async fn execute(&self, session: &mut Session, out: &mut Output<'_>) -> Result<()> {
        match self {
            Command::Create(_) => lobby::create(session, out).await,
            Command::Join { lobby_id, .. } => lobby::join(session, lobby_id, out).await,
            Command::Leave(_) => lobby::leave(session, out).await,
            Command::Info(_) => lobby::info(session, out).await,
            Command::Friends(_) => friends::lobbies(session, out).await,
            Command::Invite { friend_id, .. } => friends::invite(session, friend_id, out).await,
            Command::VpnStatus(_) => vpn::status(session, out).await,
            Command::VpnRoutes(_) => vpn::routes(session, out).await,
        }
    }
}

/// A connection to the service plus the deadline every call on it must meet.
pub struct Session {
    conn: IpcConnection,
    deadline: Instant,
}

impl Session {
    /// Connect to the service. `budget` starts counting now and covers both
    /// the connection and the call made through the session.
    pub async fn open(client: &IpcClient, budget: Duration) -> IpcResult<Self> {
        let deadline = Instant::now() + budget;
        let conn = client.connect(deadline).await?;
        Ok(Self { conn, deadline })
    }

    /// Make one typed call against the session deadline.
    pub async fn invoke<C: Call>(&mut self, call: &C) -> IpcResult<C::Response> {
        self.conn.invoke(call, self.deadline).await
    }
}
