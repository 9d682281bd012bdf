//! # Model
//!
//! A [`Model`] describes one kind of entity managed by the console: its input types, the
//! remote operations for it, and how it is laid out in a table. A [`ModelController`] runs
//! those operations against a [`Transport`], keeps the cached list and emits a
//! [`ModelEvent`] after each successful change.

mod action;
mod cell;
mod column;
mod controller;
mod error;
mod event;
mod list_cache;
mod table;

pub use action::{ActionCommand, ActionOutcome, TableAction, default_table_actions, EDIT, DELETE};
pub use cell::{Cell, ChipSummary, Link};
pub use column::{ColumnDefinition, Entity, Formatter};
pub use controller::ModelController;
pub use error::Error;
pub use event::{EventKind, ModelEvent};
pub use list_cache::ListCache;
pub use table::{ColumnHeader, Row, Table};

use crate::transports::Transport;
use async_trait::async_trait;

#[async_trait]
pub trait Model: Send + Sync + Sized + 'static {
    /// The collection name, used in links and events.
    const SLUG: &'static str;
    type Item: Entity + Clone + Send + Sync + 'static;
    /// Input accepted by `add_fn`. Checked against the creation schema before sending.
    type AddInput: Send + 'static;
    /// Input accepted by `update_fn`. Checked against the update schema before sending.
    type UpdateInput: Send + 'static;
    
    /// The table columns.
    fn columns() -> Vec<ColumnDefinition<Self::Item>>;
    
    async fn list_fn<T>(transport: &T) -> Result<Vec<Self::Item>, Error>
    where
        T: Transport;
    
    /// Fetches one item. `None` if the service has no item with `id`.
    async fn find_fn<T>(transport: &T, id: &str) -> Result<Option<Self::Item>, Error>
    where
        T: Transport;
    
    async fn add_fn<T>(transport: &T, input: Self::AddInput) -> Result<Self::Item, Error>
    where
        T: Transport;
    
    async fn update_fn<T>(
        transport: &T,
        item: &Self::Item,
        input: Self::UpdateInput,
    ) -> Result<Self::Item, Error>
    where
        T: Transport;
    
    async fn delete_fn<T>(transport: &T, id: &str) -> Result<(), Error>
    where
        T: Transport;
    
    /// The actions shown in an item's row.
    fn table_actions(_item: &Self::Item) -> Vec<TableAction> {
        default_table_actions()
    }
    
    /// Runs the model-specific action `name` on `item`.
    async fn run_action<T>(_transport: &T, name: &str, _item: &Self::Item) -> Result<(), Error>
    where
        T: Transport,
    {
        Err(Error::UnknownAction(name.to_string()))
    }
}
