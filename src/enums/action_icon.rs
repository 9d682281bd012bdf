use serde::{Serialize, Serializer};

/// Icon shown on a table action button.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActionIcon {
    Play,
    Stop,
    Edit,
    Delete,
}

impl ActionIcon {
    /// The icon's name in the Material icon set.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play_arrow",
            Self::Stop => "stop",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl Serialize for ActionIcon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
