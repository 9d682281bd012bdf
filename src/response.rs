use crate::servers::Server;
use crate::serializers::null_as_default;
use serde::Deserialize;

/// Acknowledgment returned by mutations that have no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MutationAck {
    #[serde(default, rename = "clientMutationId")]
    pub client_mutation_id: Option<String>,
}

/// Payload of a mutation returning a server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerPayload {
    pub data: Server,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListServersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: Vec<Server>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetServerResponse {
    #[serde(default)]
    pub data: Option<Server>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateServerResponse {
    pub mutation: ServerPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateServerResponse {
    pub mutation: ServerPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteServerResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutation: MutationAck,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartServerResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutation: MutationAck,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopServerResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutation: MutationAck,
}
