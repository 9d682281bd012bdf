use crate::schema::ValidationError;
use crate::transports::{Error as TransportError, RemoteErrors};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", .0)]
    Validation(#[from] ValidationError),
    #[error("Transport error: {}", .0)]
    Transport(#[from] TransportError),
    #[error("No item found in {} with id {}", .slug, .id)]
    NotFound {
        slug: &'static str,
        id: String,
    },
    #[error("Action {} is disabled for this item", .0)]
    ActionDisabled(&'static str),
    #[error("Unknown action: {}", .0)]
    UnknownAction(String),
}

impl Error {
    /// Checks if the input was rejected before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
    
    /// The errors reported by the remote service, if that is where this error came from.
    pub fn remote_errors(&self) -> Option<&RemoteErrors> {
        match self {
            Self::Transport(TransportError::Remote(errors)) => Some(errors),
            _ => None,
        }
    }
}
