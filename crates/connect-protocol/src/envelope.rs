//! Request/response envelopes.
//!
//! Both ends of the socket share these types. The client builds requests with
//! [`Request::for_call`] and reads responses with [`Response::from_json`]; a
//! service answering it uses [`Request::from_json`], [`Response::success`],
//! [`Response::error`] and the [`error_codes`] constants.

use crate::messages::Call;
use serde::{Deserialize, Serialize};

/// Service methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    // Lobby
    #[serde(rename = "lobby.create")]
    CreateLobby,
    #[serde(rename = "lobby.join")]
    JoinLobby,
    #[serde(rename = "lobby.leave")]
    LeaveLobby,
    #[serde(rename = "lobby.info")]
    GetLobbyInfo,

    // Friends
    #[serde(rename = "friends.lobbies")]
    GetFriendLobbies,
    #[serde(rename = "friends.invite")]
    InviteFriend,

    // VPN
    #[serde(rename = "vpn.status")]
    GetVpnStatus,
    #[serde(rename = "vpn.routing_table")]
    GetVpnRoutingTable,
}

/// Request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Request ID for correlation.
    pub id: String,
    /// Method to invoke.
    pub method: Method,
    /// Method parameters (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl Request {
    /// Create a request with no parameters and a fresh ID. The service treats
    /// missing `params` the same as `{}`.
    pub fn new(method: Method) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method,
            params: None,
        }
    }

    /// Create a request with parameters and a fresh ID.
    pub fn with_params(method: Method, params: serde_json::Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method,
            params: Some(params),
        }
    }

    /// Build the envelope for a typed call.
    pub fn for_call<C: Call>(call: &C) -> Result<Self, serde_json::Error> {
        Ok(Self::with_params(C::METHOD, serde_json::to_value(call)?))
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// ID of the request this answers.
    pub id: String,
    /// Result data (if successful).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error information (if failed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Error information in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Response {
    /// Create a successful response. Service side.
    pub fn success(id: &str, result: serde_json::Value) -> Self {
        Self {
            id: id.to_string(),
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response. Service side; an unparseable request is
    /// answered with an empty `id`.
    pub fn error(id: &str, code: i32, message: &str) -> Self {
        Self {
            id: id.to_string(),
            result: None,
            error: Some(ErrorInfo {
                code,
                message: message.to_string(),
                data: None,
            }),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when the service did not report an error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Standard JSON-RPC error codes a service reports in [`ErrorInfo::code`].
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}
