//! Connection settings for the console.

use crate::helpers::DEFAULT_USER_AGENT;
use crate::transports::GraphQLTransport;
use chrono::Duration;
use url::Url;

/// Environment variable holding the GraphQL endpoint URL.
pub const ENDPOINT_VAR: &str = "WG_CONSOLE_ENDPOINT";
/// Environment variable holding the bearer token.
pub const TOKEN_VAR: &str = "WG_CONSOLE_TOKEN";
/// Environment variable holding the cache TTL in seconds.
pub const CACHE_TTL_VAR: &str = "WG_CONSOLE_CACHE_TTL";

const DEFAULT_CACHE_TTL_SECONDS: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {}", .0)]
    MissingVar(&'static str),
    #[error("Invalid endpoint URL: {}", .0)]
    Url(#[from] url::ParseError),
    #[error("Invalid cache TTL: {}", .0)]
    CacheTtl(String),
}

/// Settings for connecting to the console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// The GraphQL endpoint.
    pub endpoint: Url,
    /// Bearer token sent with each request.
    pub access_token: Option<String>,
    pub user_agent: String,
    /// How long a fetched list is served from cache.
    pub cache_ttl: Duration,
}

impl ConsoleConfig {
    /// Creates a new [`ConsoleConfig`] for `endpoint` with default settings.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            access_token: None,
            user_agent: DEFAULT_USER_AGENT.into(),
            cache_ttl: Duration::seconds(DEFAULT_CACHE_TTL_SECONDS),
        })
    }
    
    /// Reads the config from `WG_CONSOLE_ENDPOINT`, `WG_CONSOLE_TOKEN` and
    /// `WG_CONSOLE_CACHE_TTL`. Only the endpoint is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }
    
    fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = get(ENDPOINT_VAR).ok_or(ConfigError::MissingVar(ENDPOINT_VAR))?;
        let mut config = Self::new(&endpoint)?;
        
        config.access_token = get(TOKEN_VAR).filter(|token| !token.is_empty());
        
        if let Some(ttl) = get(CACHE_TTL_VAR) {
            let seconds = ttl.trim().parse::<u32>()
                .map_err(|_| ConfigError::CacheTtl(ttl.clone()))?;
            
            config.cache_ttl = Duration::seconds(i64::from(seconds));
        }
        
        Ok(config)
    }
    
    /// Sets the bearer token.
    pub fn access_token<S: Into<String>>(mut self, access_token: S) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
    
    /// Sets how long a fetched list is served from cache.
    pub fn cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }
    
    /// Creates a [`GraphQLTransport`] for this config.
    pub fn transport(&self) -> GraphQLTransport {
        GraphQLTransport::builder(self.endpoint.clone())
            .access_token(self.access_token.clone())
            .user_agent(self.user_agent.as_str())
            .build()
    }
}
