use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT, InvalidHeaderValue};

pub const DEFAULT_USER_AGENT: &str = concat!("wg-console/", env!("CARGO_PKG_VERSION"));

/// Creates API headers.
pub fn create_api_headers(
    access_token: Option<&str>,
    user_agent: &str,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    
    headers.append(ACCEPT, HeaderValue::from_str("application/graphql-response+json, application/json")?);
    headers.append(USER_AGENT, HeaderValue::from_str(user_agent)?);
    
    if let Some(access_token) = access_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {access_token}"))?;
        
        value.set_sensitive(true);
        headers.append(AUTHORIZATION, value);
    }
    
    Ok(headers)
}

/// Formats an endpoint as `address:port`. The port is left off when none is set.
pub fn format_endpoint(address: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => format!("{address}:{port}"),
        None => address.to_string(),
    }
}
