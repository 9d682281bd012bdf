#![allow(dead_code)]

use wg_console::api_method::{ApiRequest, ApiResponse};
use wg_console::transports::{Error, RemoteErrors, Transport};
use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct Call {
    pub name: &'static str,
    pub variables: Value,
}

#[derive(Debug, Clone)]
enum Reply {
    Data(Value),
    Remote(String),
}

/// Answers operations with canned data and records every request it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<&'static str, Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Answers `name` with `data`.
    pub fn reply(self, name: &'static str, data: Value) -> Self {
        self.replies.lock().unwrap().insert(name, Reply::Data(data));
        self
    }
    
    /// Answers `name` with a GraphQL error.
    pub fn fail(self, name: &'static str, message: &str) -> Self {
        self.replies.lock().unwrap().insert(name, Reply::Remote(message.into()));
        self
    }
    
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
    
    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls().iter().map(|call| call.name).collect()
    }
    
    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|call| call.name == name).count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_request<Msg>(
        &self,
        msg: Msg,
    ) -> Result<oneshot::Receiver<Result<Msg::Response, Error>>, Error>
    where
        Msg: ApiRequest,
    {
        let variables = serde_json::to_value(&msg)?;
        
        self.calls.lock().unwrap().push(Call {
            name: Msg::NAME,
            variables,
        });
        
        let reply = self.replies.lock().unwrap().get(Msg::NAME).cloned();
        let result = match reply {
            Some(Reply::Data(data)) => Msg::Response::parse_from_value(data).map_err(Error::from),
            Some(Reply::Remote(message)) => Err(Error::Remote(RemoteErrors::message(message))),
            None => Err(Error::NoData(Msg::NAME)),
        };
        let (tx, rx) = oneshot::channel();
        
        tx.send(result).ok();
        
        Ok(rx)
    }
}

/// A server as the service would return it.
pub fn server_json(id: &str, enabled: bool, running: bool) -> Value {
    json!({
        "id": id,
        "name": format!("edge-{id}"),
        "address": "10.0.0.1",
        "description": "",
        "dns": ["1.1.1.1"],
        "enabled": enabled,
        "firewallMark": null,
        "listenPort": 51820,
        "mtu": null,
        "privateKey": "",
        "publicKey": "k8Vq3bXn1cYw0LrT5sFj2hUoPaEz4gMi7dNe9QxKlR0=",
        "running": running,
        "createdAt": "2024-03-01T12:00:00Z",
        "peers": [],
    })
}

pub fn ack() -> Value {
    json!({ "mutation": { "clientMutationId": null } })
}
