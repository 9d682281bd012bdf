use crate::documents;
use crate::request::{
    ListServersRequest,
    GetServerRequest,
    CreateServerRequest,
    UpdateServerRequest,
    DeleteServerRequest,
    StartServerRequest,
    StopServerRequest,
};
use crate::response::{
    ListServersResponse,
    GetServerResponse,
    CreateServerResponse,
    UpdateServerResponse,
    DeleteServerResponse,
    StartServerResponse,
    StopServerResponse,
};
use std::fmt::Debug;
use serde::Serialize;
use serde_json::Value;

/// A GraphQL operation. The request itself is serialized as the operation's variables.
pub trait ApiRequest: Debug + Serialize + Send + Sync + 'static {
    /// The operation name.
    const NAME: &'static str;
    /// The GraphQL document containing the operation.
    const DOCUMENT: &'static str;
    type Response: ApiResponse;
}

/// The `data` of a GraphQL response.
pub trait ApiResponse: Debug + Sized + Send + 'static {
    fn parse_from_value(value: Value) -> serde_json::Result<Self>;
}

macro_rules! api_method {
    (($name:literal, $document:expr) => $req:path, $res:path) => {
        impl ApiRequest for $req {
            const NAME: &'static str = $name;
            const DOCUMENT: &'static str = $document;
            type Response = $res;
        }
    };
}

macro_rules! api_response {
    ($($res:path),* $(,)?) => {
        $(
            impl ApiResponse for $res {
                fn parse_from_value(value: Value) -> serde_json::Result<Self> {
                    serde_json::from_value(value)
                }
            }
        )*
    };
}

api_method!(("Servers", documents::SERVERS) => ListServersRequest, ListServersResponse);
api_method!(("Server", documents::SERVER) => GetServerRequest, GetServerResponse);
api_method!(("CreateServer", documents::CREATE_SERVER) => CreateServerRequest, CreateServerResponse);
api_method!(("UpdateServer", documents::UPDATE_SERVER) => UpdateServerRequest, UpdateServerResponse);
api_method!(("DeleteServer", documents::DELETE_SERVER) => DeleteServerRequest, DeleteServerResponse);
api_method!(("StartServer", documents::START_SERVER) => StartServerRequest, StartServerResponse);
api_method!(("StopServer", documents::STOP_SERVER) => StopServerRequest, StopServerResponse);

api_response!(
    ListServersResponse,
    GetServerResponse,
    CreateServerResponse,
    UpdateServerResponse,
    DeleteServerResponse,
    StartServerResponse,
    StopServerResponse,
);
