//! Typed request and response payloads, one pair per service method.
//!
//! Response structs use `#[serde(default)]` so a field the service leaves out
//! decodes to its zero value instead of failing the whole call.

use crate::envelope::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A typed request bound to its method and response payload.
pub trait Call: Serialize {
    /// Method this request is sent as.
    const METHOD: Method;

    /// Payload found in the response's `result`.
    type Response: DeserializeOwned + Serialize + Debug;
}

macro_rules! call {
    ($request:ty => $method:ident, $response:ty) => {
        impl Call for $request {
            const METHOD: Method = Method::$method;
            type Response = $response;
        }
    };
}

// =============================================================================
// Lobby
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLobbyRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLobbyResponse {
    pub success: bool,
    pub lobby_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinLobbyRequest {
    pub lobby_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinLobbyResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveLobbyRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveLobbyResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetLobbyInfoRequest {}

/// Current lobby membership. `lobby_id` and `members` only carry meaning
/// while `is_in_lobby` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetLobbyInfoResponse {
    pub is_in_lobby: bool,
    pub lobby_id: String,
    pub members: Vec<LobbyMember>,
}

/// A participant in the current lobby.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LobbyMember {
    pub name: String,
    /// Numeric Steam ID, kept as a string to avoid precision loss.
    pub steam_id: String,
    /// Round-trip latency in milliseconds.
    pub ping: i32,
    /// Relay path used to reach this member.
    pub relay_info: String,
}

call!(CreateLobbyRequest => CreateLobby, CreateLobbyResponse);
call!(JoinLobbyRequest => JoinLobby, JoinLobbyResponse);
call!(LeaveLobbyRequest => LeaveLobby, LeaveLobbyResponse);
call!(GetLobbyInfoRequest => GetLobbyInfo, GetLobbyInfoResponse);

// =============================================================================
// Friends
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetFriendLobbiesRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFriendLobbiesResponse {
    pub lobbies: Vec<FriendLobby>,
}

/// A friend together with the lobby they are currently in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendLobby {
    pub name: String,
    pub steam_id: String,
    pub lobby_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InviteFriendRequest {
    pub friend_steam_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteFriendResponse {
    pub success: bool,
}

call!(GetFriendLobbiesRequest => GetFriendLobbies, GetFriendLobbiesResponse);
call!(InviteFriendRequest => InviteFriend, InviteFriendResponse);

// =============================================================================
// VPN
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetVpnStatusRequest {}

/// VPN interface state. Everything besides `enabled` only carries meaning
/// while `enabled` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVpnStatusResponse {
    pub enabled: bool,
    pub local_ip: String,
    pub device_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<VpnStats>,
}

/// Traffic counters for the VPN interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpnStats {
    pub packets_sent: u64,
    pub bytes_sent: u64,
    pub packets_received: u64,
    pub bytes_received: u64,
    pub packets_dropped: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetVpnRoutingTableRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVpnRoutingTableResponse {
    pub routes: Vec<VpnRoute>,
}

/// One routing-table entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpnRoute {
    /// IPv4 address, most significant octet first.
    pub ip: u32,
    pub name: String,
    pub is_local: bool,
}

call!(GetVpnStatusRequest => GetVpnStatus, GetVpnStatusResponse);
call!(GetVpnRoutingTableRequest => GetVpnRoutingTable, GetVpnRoutingTableResponse);
