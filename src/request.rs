use crate::servers::{ServerCreateInput, UpdateServerInput};
use serde::Serialize;

/// Identifies the entity a mutation applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdInput {
    pub id: String,
}

impl IdInput {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListServersRequest {}

#[derive(Debug, Clone, Serialize)]
pub struct GetServerRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateServerRequest {
    pub input: ServerCreateInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateServerRequest {
    pub input: UpdateServerInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteServerRequest {
    pub input: IdInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartServerRequest {
    pub input: IdInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct StopServerRequest {
    pub input: IdInput,
}
