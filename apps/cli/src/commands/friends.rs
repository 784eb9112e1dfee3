//! Friend commands: list friend lobbies, invite a friend.

use super::Session;
use crate::output::Output;
use anyhow::{Context, Result};
use connect_ipc::protocol::{
    GetFriendLobbiesRequest, GetFriendLobbiesResponse, InviteFriendRequest, InviteFriendResponse,
};
use std::io::{self, Write};
use tracing::debug;

/// List lobbies that friends are currently in.
pub async fn lobbies(session: &mut Session, out: &mut Output<'_>) -> Result<()> {
    let response = session
        .invoke(&GetFriendLobbiesRequest {})
        .await
        .context("could not get friend lobbies")?;

    debug!(count = response.lobbies.len(), "Friend lobbies received");
    out.emit(&response, render_friend_lobbies)?;
    Ok(())
}

/// Invite a friend to the current lobby.
pub async fn invite(session: &mut Session, friend_id: &str, out: &mut Output<'_>) -> Result<()> {
    let request = InviteFriendRequest {
        friend_steam_id: friend_id.to_string(),
    };
    let response = session
        .invoke(&request)
        .await
        .context("could not invite friend")?;

    out.emit(&response, render_invite)?;
    Ok(())
}

pub fn render_friend_lobbies(
    response: &GetFriendLobbiesResponse,
    w: &mut dyn Write,
) -> io::Result<()> {
    writeln!(w, "Friend Lobbies:")?;
    for lobby in &response.lobbies {
        writeln!(
            w,
            "  - Friend: {} ({}), Lobby: {}",
            lobby.name, lobby.steam_id, lobby.lobby_id
        )?;
    }
    Ok(())
}

pub fn render_invite(response: &InviteFriendResponse, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Success: {}", response.success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_ipc::protocol::FriendLobby;

    #[test]
    fn test_render_friend_lobbies() {
        let response = GetFriendLobbiesResponse {
            lobbies: vec![
                FriendLobby {
                    name: "mika".into(),
                    steam_id: "76561198000000003".into(),
                    lobby_id: "109775241021923456".into(),
                },
                FriendLobby {
                    name: "jo".into(),
                    steam_id: "76561198000000004".into(),
                    lobby_id: "109775241021920000".into(),
                },
            ],
        };

        let mut buf = Vec::new();
        render_friend_lobbies(&response, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Friend Lobbies:\n\
             \x20 - Friend: mika (76561198000000003), Lobby: 109775241021923456\n\
             \x20 - Friend: jo (76561198000000004), Lobby: 109775241021920000\n"
        );
    }

    #[test]
    fn test_render_friend_lobbies_empty() {
        let mut buf = Vec::new();
        render_friend_lobbies(&GetFriendLobbiesResponse::default(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Friend Lobbies:\n");
    }

    #[test]
    fn test_render_invite() {
        let mut buf = Vec::new();
        render_invite(&InviteFriendResponse { success: false }, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Success: false\n");
    }
}
