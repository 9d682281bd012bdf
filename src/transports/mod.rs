pub mod graphql;

mod error;

pub use error::{Error, RemoteError, RemoteErrors};
pub use graphql::GraphQLTransport;

use crate::api_method::ApiRequest;
use async_trait::async_trait;
use tokio::sync::oneshot;

/// Sends GraphQL operations to the console's API.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Sends a request. The response is delivered through the returned receiver.
    async fn send_request<Msg>(
        &self,
        msg: Msg,
    ) -> Result<oneshot::Receiver<Result<Msg::Response, Error>>, Error>
    where
        Msg: ApiRequest;
}

/// Sends a request over `transport` and waits for the response.
pub async fn request<T, Msg>(
    transport: &T,
    msg: Msg,
) -> Result<Msg::Response, Error>
where
    T: Transport,
    Msg: ApiRequest,
{
    let rx = transport.send_request(msg).await?;
    let response = rx.await??;
    
    Ok(response)
}
