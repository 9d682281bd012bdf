use super::Server;
use crate::enums::{ActionColor, ActionIcon};
use crate::model::{default_table_actions, ActionCommand, TableAction};

pub const START: &str = "start";
pub const STOP: &str = "stop";
pub const TOGGLE: &str = "start/stop";

/// The start/stop toggle for `server`. Disabled while the server is not enabled.
pub fn toggle_action(server: &Server) -> TableAction {
    let (icon, color, command) = if server.running {
        (ActionIcon::Stop, ActionColor::Warning, ActionCommand::Run(STOP))
    } else {
        (ActionIcon::Play, ActionColor::Positive, ActionCommand::Run(START))
    };
    
    TableAction {
        name: TOGGLE,
        icon,
        color,
        disabled: !server.enabled,
        command,
    }
}

pub fn table_actions(server: &Server) -> Vec<TableAction> {
    let mut actions = vec![toggle_action(server)];
    
    actions.extend(default_table_actions());
    actions
}
