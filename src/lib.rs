pub mod api_method;
pub mod config;
pub mod enums;
pub mod helpers;
pub mod model;
pub mod request;
pub mod response;
pub mod schema;
pub mod servers;
pub mod transports;
pub mod types;

pub (crate) mod documents;
pub (crate) mod serializers;
