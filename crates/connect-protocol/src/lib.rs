//! Wire types for talking to the ConnectTool service.
//!
//! The service speaks a JSON-RPC-like protocol: one JSON object per line,
//! a [`Request`] envelope out and a [`Response`] envelope back. Each command
//! the service understands is described by a typed request struct that
//! implements [`Call`], which ties it to its [`Method`] and response type.

mod envelope;
mod messages;

pub use envelope::{error_codes, ErrorInfo, Method, Request, Response};
pub use messages::{
    Call, CreateLobbyRequest, CreateLobbyResponse, FriendLobby, GetFriendLobbiesRequest,
    GetFriendLobbiesResponse, GetLobbyInfoRequest, GetLobbyInfoResponse, GetVpnRoutingTableRequest,
    GetVpnRoutingTableResponse, GetVpnStatusRequest, GetVpnStatusResponse, InviteFriendRequest,
    InviteFriendResponse, JoinLobbyRequest, JoinLobbyResponse, LeaveLobbyRequest,
    LeaveLobbyResponse, LobbyMember, VpnRoute, VpnStats,
};
