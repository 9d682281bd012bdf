mod common;

use common::{ack, server_json, MockTransport};
use wg_console::model::{ActionOutcome, Cell, Error, EventKind, Model, ModelController};
use wg_console::servers::{Server, Servers, ServerAddInput, ServerUpdateInput, ServersController, START, TOGGLE};
use wg_console::transports::Error as TransportError;
use chrono::Duration;
use serde_json::json;
use tokio::sync::broadcast::error::TryRecvError;

fn controller(transport: MockTransport) -> ServersController<MockTransport> {
    ModelController::new(transport, Duration::seconds(30))
}

fn server(id: &str, enabled: bool, running: bool) -> Server {
    serde_json::from_value(server_json(id, enabled, running)).unwrap()
}

fn add_input() -> ServerAddInput {
    ServerAddInput {
        name: "edge-1".into(),
        address: "1.2.3.4".into(),
        dns: vec!["1.1.1.1".into()],
        listen_port: Some(51820),
        ..Default::default()
    }
}

#[tokio::test]
async fn lists_servers() {
    let controller = controller(MockTransport::new()
        .reply("Servers", json!({ "servers": [server_json("1", true, false), server_json("2", false, false)] })));
    let servers = controller.list().await.unwrap();
    
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[1].id, "2");
}

#[tokio::test]
async fn cached_list_is_fetched_once() {
    let controller = controller(MockTransport::new()
        .reply("Servers", json!({ "servers": [server_json("1", true, false)] })));
    
    controller.cached().await.unwrap();
    controller.cached().await.unwrap();
    
    assert_eq!(controller.transport().count("Servers"), 1);
}

#[tokio::test]
async fn find_missing_server_is_not_found() {
    let controller = controller(MockTransport::new()
        .reply("Server", json!({ "data": null })));
    let error = controller.find("404").await.unwrap_err();
    
    assert!(matches!(error, Error::NotFound { slug: "servers", ref id } if id == "404"));
    assert_eq!(controller.transport().calls()[0].variables, json!({ "id": "404" }));
}

#[tokio::test]
async fn add_without_dns_sends_nothing() {
    let controller = controller(MockTransport::new());
    let error = controller.add(ServerAddInput {
        dns: Vec::new(),
        ..add_input()
    }).await.unwrap_err();
    
    match error {
        Error::Validation(error) => assert!(error.has_issue("dns")),
        error => panic!("unexpected error: {error}"),
    }
    
    assert!(controller.transport().calls().is_empty());
}

#[tokio::test]
async fn add_with_bad_numbers_sends_nothing() {
    let controller = controller(MockTransport::new());
    let error = controller.add(ServerAddInput {
        listen_port: Some(65536),
        mtu: Some(1000),
        ..add_input()
    }).await.unwrap_err();
    
    assert!(error.is_validation());
    assert!(controller.transport().calls().is_empty());
}

#[tokio::test]
async fn add_sends_defaults_and_emits_event() {
    let controller = controller(MockTransport::new()
        .reply("CreateServer", json!({ "mutation": { "data": server_json("9", false, false) } })));
    let mut events = controller.subscribe();
    let created = controller.add(add_input()).await.unwrap();
    let calls = controller.transport().calls();
    
    assert_eq!(created.id, "9");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "CreateServer");
    assert_eq!(calls[0].variables, json!({
        "input": {
            "name": "edge-1",
            "address": "1.2.3.4",
            "description": "",
            "dns": ["1.1.1.1"],
            "enabled": false,
            "listenPort": 51820,
            "privateKey": "",
            "publicKey": "",
        },
    }));
    
    let event = events.try_recv().unwrap();
    
    assert_eq!(event.slug, "servers");
    assert_eq!(event.kind, EventKind::Created { id: "9".into() });
}

#[tokio::test]
async fn update_with_short_key_sends_nothing() {
    let controller = controller(MockTransport::new());
    let error = controller.update(&server("1", true, false), ServerUpdateInput {
        public_key: "short".into(),
        ..Default::default()
    }).await.unwrap_err();
    
    match error {
        Error::Validation(error) => assert!(error.has_issue("publicKey")),
        error => panic!("unexpected error: {error}"),
    }
    
    assert!(controller.transport().calls().is_empty());
}

#[tokio::test]
async fn update_with_bad_numbers_sends_nothing() {
    let controller = controller(MockTransport::new());
    let error = controller.update(&server("1", true, false), ServerUpdateInput {
        public_key: "k8Vq3bXn1cYw0LrT5sFj2hUoPaEz4gMi7dNe9QxKlR0=".into(),
        listen_port: Some(-1),
        mtu: Some(1501),
        ..Default::default()
    }).await.unwrap_err();
    
    assert!(error.is_validation());
    assert!(controller.transport().calls().is_empty());
}

#[tokio::test]
async fn update_merges_item_id() {
    let controller = controller(MockTransport::new()
        .reply("UpdateServer", json!({ "mutation": { "data": server_json("1", true, false) } })));
    
    controller.update(&server("1", true, false), ServerUpdateInput {
        description: Some("frankfurt".into()),
        public_key: "k8Vq3bXn1cYw0LrT5sFj2hUoPaEz4gMi7dNe9QxKlR0=".into(),
        ..Default::default()
    }).await.unwrap();
    
    assert_eq!(controller.transport().calls()[0].variables, json!({
        "input": {
            "id": "1",
            "description": "frankfurt",
            "publicKey": "k8Vq3bXn1cYw0LrT5sFj2hUoPaEz4gMi7dNe9QxKlR0=",
        },
    }));
}

#[tokio::test]
async fn delete_invalidates_cache() {
    let controller = controller(MockTransport::new()
        .reply("Servers", json!({ "servers": [server_json("1", true, false)] }))
        .reply("DeleteServer", ack()));
    
    controller.cached().await.unwrap();
    controller.delete("1").await.unwrap();
    controller.cached().await.unwrap();
    
    assert_eq!(controller.transport().call_names(), vec!["Servers", "DeleteServer", "Servers"]);
    assert_eq!(controller.transport().calls()[1].variables, json!({ "input": { "id": "1" } }));
}

#[tokio::test]
async fn start_refreshes_list_once() {
    let controller = controller(MockTransport::new()
        .reply("StartServer", ack())
        .reply("Servers", json!({ "servers": [server_json("1", true, true)] })));
    let mut events = controller.subscribe();
    
    controller.start(&server("1", true, false)).await.unwrap();
    
    assert_eq!(controller.transport().call_names(), vec!["StartServer", "Servers"]);
    assert_eq!(events.try_recv().unwrap().kind, EventKind::ActionPerformed {
        action: START.into(),
        id: "1".into(),
    });
    assert_eq!(events.try_recv().unwrap().kind, EventKind::Refreshed { count: 1 });
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    
    // the refreshed list is served from cache
    let servers = controller.cached().await.unwrap();
    
    assert!(servers[0].running);
    assert_eq!(controller.transport().count("Servers"), 1);
}

#[tokio::test]
async fn start_succeeds_when_refresh_fails() {
    let controller = controller(MockTransport::new()
        .reply("StartServer", ack()));
    let mut events = controller.subscribe();
    
    controller.start(&server("1", true, false)).await.unwrap();
    
    assert_eq!(controller.transport().call_names(), vec!["StartServer", "Servers"]);
    assert!(matches!(events.try_recv().unwrap().kind, EventKind::ActionPerformed { .. }));
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    
    // the cache stays invalidated, so the next read fetches again
    assert!(controller.cached().await.is_err());
    assert_eq!(controller.transport().count("Servers"), 2);
}

#[tokio::test]
async fn stop_sends_stop_for_running_server() {
    let controller = controller(MockTransport::new()
        .reply("StopServer", ack())
        .reply("Servers", json!({ "servers": [server_json("1", true, false)] })));
    
    controller.toggle(&server("1", true, true)).await.unwrap();
    
    assert_eq!(controller.transport().call_names(), vec!["StopServer", "Servers"]);
}

#[tokio::test]
async fn failed_start_does_not_refresh() {
    let controller = controller(MockTransport::new()
        .fail("StartServer", "interface wg0 is already up")
        .reply("Servers", json!({ "servers": [] })));
    let mut events = controller.subscribe();
    let error = controller.start(&server("1", true, true)).await.unwrap_err();
    
    assert_eq!(error.remote_errors().unwrap().0[0].message, "interface wg0 is already up");
    assert!(matches!(error, Error::Transport(TransportError::Remote(_))));
    assert_eq!(controller.transport().call_names(), vec!["StartServer"]);
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn disabled_toggle_cannot_be_dispatched() {
    let controller = controller(MockTransport::new());
    let item = server("1", false, false);
    let actions = Servers::table_actions(&item);
    let toggle = actions.iter().find(|action| action.name == TOGGLE).unwrap();
    let error = controller.dispatch(toggle, &item).await.unwrap_err();
    
    assert!(matches!(error, Error::ActionDisabled(TOGGLE)));
    assert!(controller.transport().calls().is_empty());
}

#[tokio::test]
async fn dispatch_runs_actions() {
    let controller = controller(MockTransport::new()
        .reply("StartServer", ack())
        .reply("DeleteServer", ack())
        .reply("Servers", json!({ "servers": [] })));
    let item = server("1", true, false);
    let actions = Servers::table_actions(&item);
    let mut outcomes = Vec::new();
    
    for action in &actions {
        outcomes.push(controller.dispatch(action, &item).await.unwrap());
    }
    
    assert_eq!(outcomes, vec![
        ActionOutcome::Performed,
        ActionOutcome::Edit(item.clone()),
        ActionOutcome::Deleted,
    ]);
    assert_eq!(controller.transport().call_names(), vec!["StartServer", "Servers", "DeleteServer"]);
}

#[tokio::test]
async fn table_renders_rows() {
    let mut crowded = server_json("1", true, true);
    
    crowded["peers"] = json!([
        { "id": "a", "name": "laptop" },
        { "id": "b", "name": "phone" },
        { "id": "c", "name": "tablet" },
        { "id": "d", "name": "desktop" },
    ]);
    
    let controller = controller(MockTransport::new()
        .reply("Servers", json!({ "servers": [crowded, server_json("2", true, false)] })));
    let table = controller.table().await.unwrap();
    let names = table.columns.iter().map(|column| column.name).collect::<Vec<_>>();
    
    assert_eq!(table.slug, "servers");
    assert_eq!(names, vec!["name", "enabled", "running", "peers", "createdAt"]);
    assert_eq!(table.rows.len(), 2);
    
    match table.cell("1", "peers").unwrap() {
        Cell::Chips(summary) => {
            assert_eq!(summary.chips, vec!["laptop", "phone", "tablet"]);
            assert_eq!(summary.more, 1);
        },
        cell => panic!("unexpected cell: {cell:?}"),
    }
    
    match table.cell("2", "peers").unwrap() {
        Cell::Chips(summary) => assert_eq!(summary.more_label(), None),
        cell => panic!("unexpected cell: {cell:?}"),
    }
    
    assert_eq!(table.cell("1", "name").unwrap().to_string(), "edge-1 (10.0.0.1:51820)");
}
