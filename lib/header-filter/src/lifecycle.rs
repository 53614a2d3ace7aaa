/// Lifecycle of a plugin root context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootState {
    Created,
    Started,
    /// Start was refused; the root never spawns streams.
    Failed,
    Stopped,
}

/// Lifecycle of an HTTP stream context, advanced by host callbacks only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Created,
    RequestHeadersSeen,
    ResponseHeadersSeen,
    Done,
}

impl RootState {
    pub fn can_spawn(self) -> bool {
        self == RootState::Started
    }
}
