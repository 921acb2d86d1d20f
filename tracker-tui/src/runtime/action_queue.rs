use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracker_client::Request;

/// Work queued by key handlers and run by the event loop after input.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    Dispatch(Request),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
