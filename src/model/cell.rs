use crate::types::DateTime;
use std::fmt;
use serde::Serialize;

/// A rendering-agnostic description of a table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Text(String),
    Bool(bool),
    Timestamp(DateTime),
    Link(Link),
    Chips(ChipSummary),
}

/// Text linking to another page, with an optional secondary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
    pub caption: Option<String>,
}

/// The first few items of a list shown as chips, with a count of the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipSummary {
    pub chips: Vec<String>,
    /// How many items did not get a chip.
    pub more: usize,
}

impl ChipSummary {
    /// Creates a [`ChipSummary`] showing at most `max` of `items`.
    pub fn new<I>(items: I, max: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut chips = Vec::new();
        let mut total = 0;
        
        for item in items {
            if chips.len() < max {
                chips.push(item);
            }
            
            total += 1;
        }
        
        let more = total - chips.len();
        
        Self {
            chips,
            more,
        }
    }
    
    /// The label for the collapsed items, e.g. "2 more". `None` when every item has a chip.
    pub fn more_label(&self) -> Option<String> {
        if self.more > 0 {
            Some(format!("{} more", self.more))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write!(f, "{text}"),
            Self::Bool(true) => write!(f, "yes"),
            Self::Bool(false) => write!(f, "no"),
            Self::Timestamp(timestamp) => write!(f, "{}", timestamp.format("%Y-%m-%d %H:%M:%S")),
            Self::Link(link) => match &link.caption {
                Some(caption) => write!(f, "{} ({})", link.text, caption),
                None => write!(f, "{}", link.text),
            },
            Self::Chips(summary) => {
                let mut parts = summary.chips.clone();
                
                if let Some(label) = summary.more_label() {
                    parts.push(label);
                }
                
                write!(f, "{}", parts.join(", "))
            },
        }
    }
}
