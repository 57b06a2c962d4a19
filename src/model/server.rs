use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub status: ServerStatusDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerStatusDto {
    Running,
    Stopped,
}

/// Request body for creating a server.
///
/// Missing fields deserialize as empty strings so they are rejected by boundary
/// validation with a field-specific message. `status` is accepted for compatibility
/// but never honoured; new servers always start stopped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateServerDto {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "ipAddress")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatusDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerStatusResponseDto {
    pub status: ServerStatusDto,
}
