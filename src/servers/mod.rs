//! # Servers
//!
//! WireGuard servers managed by the console.
//!
//! ## Examples
//! ```no_run
//! use wg_console::config::ConsoleConfig;
//! use wg_console::servers::{self, ServerAddInput};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConsoleConfig::new("https://console.example.com/graphql")?;
//! let controller = servers::connect(&config);
//! let server = controller.add(ServerAddInput {
//!     name: "edge-1".into(),
//!     address: "10.0.0.1".into(),
//!     dns: vec!["1.1.1.1".into()],
//!     listen_port: Some(51820),
//!     ..Default::default()
//! }).await?;
//!
//! controller.start(&server).await?;
//! # Ok(())
//! # }
//! ```

mod actions;
mod columns;
mod schema;

pub use actions::{START, STOP, TOGGLE};
pub use columns::MAX_PEER_CHIPS;
pub use schema::{
    ServerAddInput,
    ServerCreateInput,
    ServerUpdateInput,
    ServerUpdateFields,
    UpdateServerInput,
};

use crate::config::ConsoleConfig;
use crate::helpers::format_endpoint;
use crate::model::{Cell, ColumnDefinition, Entity, Error, Model, ModelController, TableAction};
use crate::request::{
    ListServersRequest,
    GetServerRequest,
    CreateServerRequest,
    UpdateServerRequest,
    DeleteServerRequest,
    StartServerRequest,
    StopServerRequest,
    IdInput,
};
use crate::serializers::{id_from_number_or_string, null_as_default};
use crate::transports::{request, GraphQLTransport, Transport};
use crate::types::DateTime;
use async_trait::async_trait;
use serde::Deserialize;

/// A controller for servers.
pub type ServersController<T> = ModelController<Servers, T>;

/// A peer as referenced by a server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeerRef {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A WireGuard server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub firewall_mark: Option<u32>,
    #[serde(default)]
    pub listen_port: Option<u16>,
    #[serde(default)]
    pub mtu: Option<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_key: String,
    /// Whether the service reports the interface as up. Only changed by start and stop.
    #[serde(default)]
    pub running: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub peers: Vec<PeerRef>,
    pub created_at: DateTime,
}

impl Server {
    /// The server's endpoint as `address:port`.
    pub fn endpoint(&self) -> String {
        format_endpoint(&self.address, self.listen_port)
    }
    
    /// The console path listing this server's peers.
    pub fn peers_path(&self) -> String {
        format!("/{}/{}/peers", Servers::SLUG, self.id)
    }
}

impl Entity for Server {
    fn id(&self) -> &str {
        &self.id
    }
    
    fn field(&self, name: &str) -> Cell {
        fn optional<N: ToString>(value: Option<N>) -> Cell {
            value.map_or(Cell::Empty, |value| Cell::Text(value.to_string()))
        }
        
        match name {
            "id" => Cell::Text(self.id.clone()),
            "name" => Cell::Text(self.name.clone()),
            "address" => Cell::Text(self.address.clone()),
            "description" => Cell::Text(self.description.clone()),
            "dns" => Cell::Text(self.dns.join(", ")),
            "enabled" => Cell::Bool(self.enabled),
            "running" => Cell::Bool(self.running),
            "firewallMark" => optional(self.firewall_mark),
            "listenPort" => optional(self.listen_port),
            "mtu" => optional(self.mtu),
            "publicKey" => Cell::Text(self.public_key.clone()),
            "peers" => Cell::Text(self.peers.len().to_string()),
            "createdAt" => Cell::Timestamp(self.created_at),
            // the private key is never shown in a table
            _ => Cell::Empty,
        }
    }
}

/// The servers model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Servers;

#[async_trait]
impl Model for Servers {
    const SLUG: &'static str = "servers";
    type Item = Server;
    type AddInput = ServerAddInput;
    type UpdateInput = ServerUpdateInput;
    
    fn columns() -> Vec<ColumnDefinition<Server>> {
        columns::columns()
    }
    
    async fn list_fn<T>(transport: &T) -> Result<Vec<Server>, Error>
    where
        T: Transport,
    {
        let response = request(transport, ListServersRequest::default()).await?;
        
        Ok(response.servers)
    }
    
    async fn find_fn<T>(transport: &T, id: &str) -> Result<Option<Server>, Error>
    where
        T: Transport,
    {
        let response = request(transport, GetServerRequest {
            id: id.to_string(),
        }).await?;
        
        Ok(response.data)
    }
    
    async fn add_fn<T>(transport: &T, input: ServerAddInput) -> Result<Server, Error>
    where
        T: Transport,
    {
        let input = input.parse()?;
        let response = request(transport, CreateServerRequest {
            input,
        }).await?;
        
        Ok(response.mutation.data)
    }
    
    async fn update_fn<T>(
        transport: &T,
        item: &Server,
        input: ServerUpdateInput,
    ) -> Result<Server, Error>
    where
        T: Transport,
    {
        let fields = input.parse()?;
        let response = request(transport, UpdateServerRequest {
            input: UpdateServerInput {
                id: item.id.clone(),
                fields,
            },
        }).await?;
        
        Ok(response.mutation.data)
    }
    
    async fn delete_fn<T>(transport: &T, id: &str) -> Result<(), Error>
    where
        T: Transport,
    {
        request(transport, DeleteServerRequest {
            input: IdInput::new(id),
        }).await?;
        
        Ok(())
    }
    
    fn table_actions(item: &Server) -> Vec<TableAction> {
        actions::table_actions(item)
    }
    
    async fn run_action<T>(transport: &T, name: &str, item: &Server) -> Result<(), Error>
    where
        T: Transport,
    {
        let input = IdInput::new(item.id.as_str());
        
        match name {
            START => {
                request(transport, StartServerRequest { input }).await?;
            },
            STOP => {
                request(transport, StopServerRequest { input }).await?;
            },
            name => {
                return Err(Error::UnknownAction(name.to_string()));
            },
        }
        
        log::debug!("{} acknowledged for server {}", name, item.id);
        
        Ok(())
    }
}

impl<T> ModelController<Servers, T>
where
    T: Transport,
{
    /// Starts `server`, then refreshes the cached list.
    pub async fn start(&self, server: &Server) -> Result<(), Error> {
        self.run_action(START, server).await
    }
    
    /// Stops `server`, then refreshes the cached list.
    pub async fn stop(&self, server: &Server) -> Result<(), Error> {
        self.run_action(STOP, server).await
    }
    
    /// Stops `server` if it is running, otherwise starts it.
    pub async fn toggle(&self, server: &Server) -> Result<(), Error> {
        if server.running {
            self.stop(server).await
        } else {
            self.start(server).await
        }
    }
}

/// Creates a servers controller talking to the console configured in `config`.
pub fn connect(config: &ConsoleConfig) -> ServersController<GraphQLTransport> {
    ModelController::new(config.transport(), config.cache_ttl)
}
