use super::Cell;
use crate::enums::ColumnAlign;

/// Renders one column of an item.
pub type Formatter<I> = fn(&I) -> Cell;

/// An item that can be shown in a table.
pub trait Entity {
    /// The item's identifier.
    fn id(&self) -> &str;
    
    /// The cell for `name` when its column has no formatter.
    fn field(&self, name: &str) -> Cell;
}

/// Describes how a column of a table of `I` renders.
#[derive(Debug, Clone)]
pub struct ColumnDefinition<I> {
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub align: ColumnAlign,
    pub format: Option<Formatter<I>>,
}

impl<I> ColumnDefinition<I>
where
    I: Entity,
{
    /// Creates a new left-aligned [`ColumnDefinition`] rendering the field `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            label: None,
            align: ColumnAlign::default(),
            format: None,
        }
    }
    
    /// Sets the header label. Defaults to the column name.
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }
    
    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }
    
    /// Sets a formatter used instead of the item's own field rendering.
    pub fn format(mut self, format: Formatter<I>) -> Self {
        self.format = Some(format);
        self
    }
    
    /// The header label.
    pub fn title(&self) -> &'static str {
        self.label.unwrap_or(self.name)
    }
    
    /// Renders this column for `item`.
    pub fn render(&self, item: &I) -> Cell {
        match self.format {
            Some(format) => format(item),
            None => item.field(self.name),
        }
    }
}
