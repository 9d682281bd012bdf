use super::{Cell, Entity, Model, TableAction};
use crate::enums::ColumnAlign;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub name: &'static str,
    pub label: &'static str,
    pub align: ColumnAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: String,
    /// One cell per column, in column order.
    pub cells: Vec<Cell>,
    pub actions: Vec<TableAction>,
}

/// A model's items laid out as a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub slug: &'static str,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Builds the table for `items` from `M`'s columns and actions.
    pub fn build<M>(items: &[M::Item]) -> Self
    where
        M: Model,
    {
        let definitions = M::columns();
        let columns = definitions
            .iter()
            .map(|column| ColumnHeader {
                name: column.name,
                label: column.title(),
                align: column.align,
            })
            .collect();
        let rows = items
            .iter()
            .map(|item| Row {
                id: item.id().to_string(),
                cells: definitions
                    .iter()
                    .map(|column| column.render(item))
                    .collect(),
                actions: M::table_actions(item),
            })
            .collect();
        
        Self {
            slug: M::SLUG,
            columns,
            rows,
        }
    }
    
    /// Gets the cell in the column named `column` for the row with `id`.
    pub fn cell(&self, id: &str, column: &str) -> Option<&Cell> {
        let index = self.columns.iter().position(|header| header.name == column)?;
        
        self.rows
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| row.cells.get(index))
    }
}
