//! Lobby commands: create, join, leave, info.

use super::Session;
use crate::output::Output;
use anyhow::{Context, Result};
use connect_ipc::protocol::{
    CreateLobbyRequest, CreateLobbyResponse, GetLobbyInfoRequest, GetLobbyInfoResponse,
    JoinLobbyRequest, JoinLobbyResponse, LeaveLobbyRequest, LeaveLobbyResponse,
};
use std::io::{self, Write};
use tracing::debug;

/// Create a new lobby.
pub async fn create(session: &mut Session, out: &mut Output<'_>) -> Result<()> {
    let response = session
        .invoke(&CreateLobbyRequest {})
        .await
        .context("could not create lobby")?;

    debug!(lobby_id = %response.lobby_id, success = response.success, "Lobby created");
    out.emit(&response, render_create)?;
    Ok(())
}

/// Join an existing lobby.
pub async fn join(session: &mut Session, lobby_id: &str, out: &mut Output<'_>) -> Result<()> {
    let request = JoinLobbyRequest {
        lobby_id: lobby_id.to_string(),
    };
    let response = session
        .invoke(&request)
        .await
        .context("could not join lobby")?;

    out.emit(&response, render_join)?;
    Ok(())
}

/// Leave the current lobby.
pub async fn leave(session: &mut Session, out: &mut Output<'_>) -> Result<()> {
    let response = session
        .invoke(&LeaveLobbyRequest {})
        .await
        .context("could not leave lobby")?;

    out.emit(&response, render_leave)?;
    Ok(())
}

/// Show the current lobby and its members.
pub async fn info(session: &mut Session, out: &mut Output<'_>) -> Result<()> {
    let response = session
        .invoke(&GetLobbyInfoRequest {})
        .await
        .context("could not get lobby info")?;

    debug!(
        in_lobby = response.is_in_lobby,
        members = response.members.len(),
        "Lobby info received"
    );
    out.emit(&response, render_lobby_info)?;
    Ok(())
}

pub fn render_create(response: &CreateLobbyResponse, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "Success: {}, Lobby ID: {}",
        response.success, response.lobby_id
    )
}

pub fn render_join(response: &JoinLobbyResponse, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "Success: {}, Message: {}",
        response.success, response.message
    )
}

pub fn render_leave(response: &LeaveLobbyResponse, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Success: {}", response.success)
}

/// Lobby id and members are only shown while in a lobby, whatever else the
/// response carries.
pub fn render_lobby_info(response: &GetLobbyInfoResponse, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "In Lobby: {}", response.is_in_lobby)?;
    if !response.is_in_lobby {
        return Ok(());
    }

    writeln!(w, "Lobby ID: {}", response.lobby_id)?;
    writeln!(w, "Members:")?;
    for member in &response.members {
        writeln!(
            w,
            "  - Name: {}, ID: {}, Ping: {}, Relay: {}",
            member.name, member.steam_id, member.ping, member.relay_info
        )?;
    }
    Ok(())
}
