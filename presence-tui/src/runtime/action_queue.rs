use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    /// Populate the user selector from the backend roster.
    LoadUsers,
    /// Fetch statistics (and avatar, for per-user pages) for the current
    /// page and selection. The sequence number gates stale completions.
    LoadStats { seq: u64 },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
