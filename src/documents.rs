// Every server query selects the same fields so list and detail views stay in sync.
macro_rules! server_fragment {
    () => {
        "fragment Server on Server { \
            id name address description dns enabled firewallMark listenPort mtu \
            privateKey publicKey running createdAt peers { id name } \
        }"
    };
}

pub const SERVERS: &str = concat!(
    "query Servers { servers { ...Server } } ",
    server_fragment!(),
);

pub const SERVER: &str = concat!(
    "query Server($id: ID!) { data: server(id: $id) { ...Server } } ",
    server_fragment!(),
);

pub const CREATE_SERVER: &str = concat!(
    "mutation CreateServer($input: CreateServerInput!) { ",
    "mutation: createServer(input: $input) { data { ...Server } } } ",
    server_fragment!(),
);

pub const UPDATE_SERVER: &str = concat!(
    "mutation UpdateServer($input: UpdateServerInput!) { ",
    "mutation: updateServer(input: $input) { data { ...Server } } } ",
    server_fragment!(),
);

pub const DELETE_SERVER: &str = "mutation DeleteServer($input: DeleteServerInput!) { \
    mutation: deleteServer(input: $input) { clientMutationId } }";

pub const START_SERVER: &str = "mutation StartServer($input: StartServerInput!) { \
    mutation: startServer(input: $input) { clientMutationId } }";

pub const STOP_SERVER: &str = "mutation StopServer($input: StopServerInput!) { \
    mutation: stopServer(input: $input) { clientMutationId } }";
