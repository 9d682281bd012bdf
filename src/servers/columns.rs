use super::Server;
use crate::enums::ColumnAlign;
use crate::model::{Cell, ChipSummary, ColumnDefinition, Link};

/// How many peers get a chip in the peers column.
pub const MAX_PEER_CHIPS: usize = 3;

pub fn columns() -> Vec<ColumnDefinition<Server>> {
    vec![
        ColumnDefinition::new("name").format(format_name),
        ColumnDefinition::new("enabled").align(ColumnAlign::Center),
        ColumnDefinition::new("running").align(ColumnAlign::Center),
        ColumnDefinition::new("peers").format(format_peers),
        ColumnDefinition::new("createdAt").label("created").align(ColumnAlign::Right),
    ]
}

fn format_name(server: &Server) -> Cell {
    Cell::Link(Link {
        text: server.name.clone(),
        href: server.peers_path(),
        caption: Some(server.endpoint()),
    })
}

fn format_peers(server: &Server) -> Cell {
    let names = server.peers
        .iter()
        .map(|peer| peer.name.clone());
    
    Cell::Chips(ChipSummary::new(names, MAX_PEER_CHIPS))
}
