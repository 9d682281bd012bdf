mod builder;
mod error;
mod helpers;

pub use builder::GraphQLTransportBuilder;
pub use error::Error;

use crate::api_method::ApiRequest;
use crate::transports::{Transport, Error as TransportError};
use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::oneshot;
use url::Url;

/// Sends operations as GraphQL over HTTP POST.
#[derive(Debug, Clone)]
pub struct GraphQLTransport {
    client: Client,
    endpoint: Url,
    access_token: Option<String>,
    user_agent: String,
}

#[async_trait]
impl Transport for GraphQLTransport {
    async fn send_request<Msg>(
        &self,
        msg: Msg,
    ) -> Result<oneshot::Receiver<Result<Msg::Response, TransportError>>, TransportError>
    where
        Msg: ApiRequest,
    {
        let headers = crate::helpers::create_api_headers(
            self.access_token.as_deref(),
            &self.user_agent,
        ).map_err(Error::from)?;
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let (tx, rx) = oneshot::channel();
        
        tokio::spawn(async move {
            let result = helpers::get_response(&client, endpoint, headers, msg).await;
            
            tx.send(result).ok();
        });
        
        Ok(rx)
    }
}

impl GraphQLTransport {
    /// Creates a new [`GraphQLTransportBuilder`].
    pub fn builder(endpoint: Url) -> GraphQLTransportBuilder {
        GraphQLTransportBuilder::new(endpoint)
    }
    
    /// Creates a new [`GraphQLTransport`] with default settings.
    pub fn new(endpoint: Url) -> Self {
        GraphQLTransportBuilder::new(endpoint).build()
    }
    
    /// Gets the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
