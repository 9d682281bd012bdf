mod action_color;
mod action_icon;
mod column_align;

pub use action_color::ActionColor;
pub use action_icon::ActionIcon;
pub use column_align::ColumnAlign;
