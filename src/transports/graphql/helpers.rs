use super::Error;
use crate::api_method::{ApiRequest, ApiResponse};
use crate::transports::{Error as TransportError, RemoteError, RemoteErrors};
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref DEFAULT_CLIENT: Client = Client::new();
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a, Msg> {
    query: &'static str,
    operation_name: &'static str,
    variables: &'a Msg,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<RemoteError>>,
}

/// Gets a response.
pub async fn get_response<Msg>(
    client: &Client,
    endpoint: Url,
    headers: HeaderMap,
    msg: Msg,
) -> Result<Msg::Response, TransportError>
where
    Msg: ApiRequest,
{
    let body = send(client, endpoint, headers, &msg).await?;
    
    parse_envelope::<Msg>(&body)
}

async fn send<Msg>(
    client: &Client,
    endpoint: Url,
    headers: HeaderMap,
    msg: &Msg,
) -> Result<Vec<u8>, Error>
where
    Msg: ApiRequest,
{
    let body = RequestBody {
        query: Msg::DOCUMENT,
        operation_name: Msg::NAME,
        variables: msg,
    };
    
    log::debug!("POST {} ({})", endpoint, Msg::NAME);
    
    let response = client.post(endpoint)
        .headers(headers)
        .json(&body)
        .send()
        .await?;
    let response = check_response_ok(response)?
        .bytes()
        .await?;
    
    Ok(response.to_vec())
}

/// Checks if the response is OK.
fn check_response_ok(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::ResponseNotOk(status))
    }
}

/// Parses a GraphQL response envelope into the response for `Msg`. Any entry in `errors` fails
/// the whole operation.
pub fn parse_envelope<Msg>(body: &[u8]) -> Result<Msg::Response, TransportError>
where
    Msg: ApiRequest,
{
    let envelope = serde_json::from_slice::<Envelope>(body)?;
    
    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        log::warn!("{} returned {} error(s)", Msg::NAME, errors.len());
        return Err(TransportError::Remote(RemoteErrors(errors)));
    }
    
    let data = envelope.data
        .filter(|data| !data.is_null())
        .ok_or(TransportError::NoData(Msg::NAME))?;
    let response = Msg::Response::parse_from_value(data)?;
    
    Ok(response)
}
