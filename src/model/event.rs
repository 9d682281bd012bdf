/// Emitted by a [`ModelController`](super::ModelController) after a successful change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEvent {
    /// The slug of the model that changed.
    pub slug: &'static str,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Created {
        id: String,
    },
    Updated {
        id: String,
    },
    Deleted {
        id: String,
    },
    /// A model action such as start or stop was acknowledged.
    ActionPerformed {
        action: String,
        id: String,
    },
    /// The cached list was fetched again.
    Refreshed {
        count: usize,
    },
}
