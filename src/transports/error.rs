use std::fmt;
use serde::Deserialize;
use serde_json::Value;

/// An error reported by the GraphQL service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.path {
            Some(path) if !path.is_empty() => {
                let path = path
                    .iter()
                    .map(|segment| match segment {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                
                write!(f, "{} (at {})", self.message, path)
            },
            _ => write!(f, "{}", self.message),
        }
    }
}

/// The errors returned with a single GraphQL response.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteErrors(pub Vec<RemoteError>);

impl RemoteErrors {
    /// Creates errors from a single message.
    pub fn message<S: Into<String>>(message: S) -> Self {
        Self(vec![RemoteError {
            message: message.into(),
            path: None,
        }])
    }
}

impl fmt::Display for RemoteErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let messages = self.0
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>();
        
        write!(f, "{}", messages.join("; "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GraphQL transport: {}", .0)]
    GraphQL(#[from] super::graphql::Error),
    #[error("Remote error: {}", .0)]
    Remote(RemoteErrors),
    #[error("Response to {} contained no data", .0)]
    NoData(&'static str),
    #[error("JSON error: {}", .0)]
    Json(#[from] serde_json::Error),
    #[error("Receiver error: {}", .0)]
    RecvError(#[from] tokio::sync::oneshot::error::RecvError),
}
