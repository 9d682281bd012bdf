use crate::schema::{check, narrow, ValidationError};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Input for creating a server, as entered by the user.
///
/// Unset strings default to empty and `enabled` defaults to `false`. The name needs at least 3
/// characters and `dns` at least one entry, so both are effectively required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerAddInput {
    #[validate(min_length = 3)]
    pub name: String,
    pub address: String,
    pub description: String,
    #[validate(min_items = 1)]
    pub dns: Vec<String>,
    pub enabled: bool,
    #[validate(minimum = 0)]
    #[validate(maximum = 4294967295)]
    pub firewall_mark: Option<i64>,
    #[validate(minimum = 0)]
    #[validate(maximum = 65535)]
    pub listen_port: Option<i64>,
    #[validate(minimum = 1280)]
    #[validate(maximum = 1500)]
    pub mtu: Option<i64>,
    pub private_key: String,
    pub public_key: String,
}

/// A checked [`ServerAddInput`], sent as `CreateServerInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCreateInput {
    pub name: String,
    pub address: String,
    pub description: String,
    pub dns: Vec<String>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_mark: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u16>,
    pub private_key: String,
    pub public_key: String,
}

impl ServerAddInput {
    /// Checks the input against the creation schema.
    pub fn parse(self) -> Result<ServerCreateInput, ValidationError> {
        check(&self)?;
        
        Ok(ServerCreateInput {
            firewall_mark: narrow("firewallMark", self.firewall_mark)?,
            listen_port: narrow("listenPort", self.listen_port)?,
            mtu: narrow("mtu", self.mtu)?,
            name: self.name,
            address: self.address,
            description: self.description,
            dns: self.dns,
            enabled: self.enabled,
            private_key: self.private_key,
            public_key: self.public_key,
        })
    }
}

/// Input for updating a server. Fields left unset are not changed.
///
/// Every field is optional except the public key, which needs at least 10 characters. A `dns`
/// list, when given, must not be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerUpdateInput {
    pub address: Option<String>,
    pub description: Option<String>,
    #[validate(min_items = 1)]
    pub dns: Option<Vec<String>>,
    pub enabled: Option<bool>,
    #[validate(minimum = 0)]
    #[validate(maximum = 4294967295)]
    pub firewall_mark: Option<i64>,
    #[validate(minimum = 0)]
    #[validate(maximum = 65535)]
    pub listen_port: Option<i64>,
    #[validate(minimum = 1280)]
    #[validate(maximum = 1500)]
    pub mtu: Option<i64>,
    pub private_key: Option<String>,
    #[validate(min_length = 10)]
    pub public_key: String,
}

/// A checked [`ServerUpdateInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerUpdateFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_mark: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    pub public_key: String,
}

/// Checked update fields merged with the id of the server they apply to, sent as
/// `UpdateServerInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateServerInput {
    pub id: String,
    #[serde(flatten)]
    pub fields: ServerUpdateFields,
}

impl ServerUpdateInput {
    /// Checks the input against the update schema.
    pub fn parse(self) -> Result<ServerUpdateFields, ValidationError> {
        check(&self)?;
        
        Ok(ServerUpdateFields {
            firewall_mark: narrow("firewallMark", self.firewall_mark)?,
            listen_port: narrow("listenPort", self.listen_port)?,
            mtu: narrow("mtu", self.mtu)?,
            address: self.address,
            description: self.description,
            dns: self.dns,
            enabled: self.enabled,
            private_key: self.private_key,
            public_key: self.public_key,
        })
    }
}
