use crate::enums::{ActionColor, ActionIcon};
use serde::Serialize;

pub const EDIT: &str = "edit";
pub const DELETE: &str = "delete";

/// What happens when a table action is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum ActionCommand {
    /// Opens the item in an editor. Nothing is sent.
    Edit,
    /// Deletes the item.
    Delete,
    /// Runs a model-specific action by name.
    Run(&'static str),
}

/// A button shown in an item's row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableAction {
    pub name: &'static str,
    pub icon: ActionIcon,
    pub color: ActionColor,
    pub disabled: bool,
    pub command: ActionCommand,
}

/// The result of dispatching a [`TableAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<I> {
    /// The caller should open an editor for the item.
    Edit(I),
    Deleted,
    Performed,
}

/// The actions every model offers: edit and delete.
pub fn default_table_actions() -> Vec<TableAction> {
    vec![
        TableAction {
            name: EDIT,
            icon: ActionIcon::Edit,
            color: ActionColor::Primary,
            disabled: false,
            command: ActionCommand::Edit,
        },
        TableAction {
            name: DELETE,
            icon: ActionIcon::Delete,
            color: ActionColor::Negative,
            disabled: false,
            command: ActionCommand::Delete,
        },
    ]
}
