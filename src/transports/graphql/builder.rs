use super::GraphQLTransport;
use super::helpers::DEFAULT_CLIENT;
use crate::helpers::DEFAULT_USER_AGENT;
use reqwest::Client;
use url::Url;

/// Builder for creating a [`GraphQLTransport`].
#[derive(Debug)]
pub struct GraphQLTransportBuilder {
    endpoint: Url,
    access_token: Option<String>,
    user_agent: String,
    client: Option<Client>,
}

impl GraphQLTransportBuilder {
    /// Creates a new [`GraphQLTransportBuilder`].
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            access_token: None,
            user_agent: DEFAULT_USER_AGENT.into(),
            client: None,
        }
    }
    
    /// Sets the bearer token sent with each request.
    pub fn access_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = access_token;
        self
    }
    
    /// Sets the user agent. If not set, the default user agent will be used.
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
    
    /// Sets the HTTP client. If not set, a shared default client is used.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
    
    /// Builds the [`GraphQLTransport`].
    pub fn build(self) -> GraphQLTransport {
        GraphQLTransport {
            client: self.client.unwrap_or_else(|| DEFAULT_CLIENT.clone()),
            endpoint: self.endpoint,
            access_token: self.access_token,
            user_agent: self.user_agent,
        }
    }
}
